// src/domain/summary.rs

use crate::domain::record::DeliveryRecord;

/// Totals shown above every record table, live or archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub driver_count: usize,
    pub substitute_count: usize,
    pub system_package_total: u64,
    pub off_system_package_total: u64,
    pub total_package_count: u64,
}

pub fn summarize(records: &[DeliveryRecord]) -> Summary {
    let system_package_total: u64 = records.iter().map(|r| u64::from(r.system_packages)).sum();
    let off_system_package_total: u64 = records
        .iter()
        .map(|r| u64::from(r.off_system_packages))
        .sum();

    Summary {
        driver_count: records.len(),
        substitute_count: records.iter().filter(|r| r.is_substitute).count(),
        system_package_total,
        off_system_package_total,
        total_package_count: system_package_total + off_system_package_total,
    }
}
