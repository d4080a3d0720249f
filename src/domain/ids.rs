// src/domain/ids.rs
use std::collections::HashSet;

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::worksheets::CURRENT_VIEW;

pub const ID_BYTES: usize = 12;

/// Generate an opaque identifier from the OS RNG.
pub fn generate_id() -> String {
    let mut rng = OsRng;
    generate_id_with(&mut rng)
}

/// 12 bytes -> 16 URL-safe base64 chars, no padding.
pub fn generate_id_with<R: RngCore>(rng: &mut R) -> String {
    let mut buf = [0u8; ID_BYTES];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// Keep drawing until `taken` rejects nothing.
pub fn fresh_id<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    loop {
        let id = generate_id();
        if !taken(&id) {
            return id;
        }
    }
}

/// Entities addressed by id in routes and view selection.
pub trait Keyed {
    fn key_mut(&mut self) -> &mut String;
}

/// Usable as a path segment and as a view parameter.
pub fn is_addressable(id: &str) -> bool {
    !id.is_empty()
        && id != CURRENT_VIEW
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Give a fresh id to every entry whose id is unusable or repeats an
/// earlier entry's. Returns how many were re-keyed.
pub fn rekey_unaddressable<T: Keyed>(items: &mut [T]) -> usize {
    let mut taken: HashSet<String> = items.iter_mut().map(|i| i.key_mut().clone()).collect();
    let mut seen = HashSet::new();
    let mut rekeyed = 0;

    for item in items.iter_mut() {
        let id = item.key_mut();
        if is_addressable(id) && seen.insert(id.clone()) {
            continue;
        }
        let new_id = fresh_id(|candidate| taken.contains(candidate));
        taken.insert(new_id.clone());
        seen.insert(new_id.clone());
        *id = new_id;
        rekeyed += 1;
    }
    rekeyed
}
