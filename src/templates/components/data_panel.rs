use maud::{html, Markup, PreEscaped};

const OCR_SCRIPT: &str = r#"
document.getElementById('ocr-file').addEventListener('change', async (e) => {
  const file = e.target.files[0];
  if (!file) return;
  const out = document.getElementById('ocr-result');
  out.textContent = 'Processing...';
  const resp = await fetch('/ocr', { method: 'POST', headers: { 'Content-Type': file.type }, body: file });
  out.textContent = await resp.text();
  e.target.value = '';
});
"#;

/// Backup, restore and wipe, plus the image text extraction helper.
pub fn data_panel(ocr_enabled: bool) -> Markup {
    html! {
        section class="card" id="data-management" {
            h2 { "Data management" }
            p { "Back up your data, restore it from a file, or start over." }

            a href="/export" { "Export data" }

            form method="post" action="/import"
                onsubmit="return confirm('Importing replaces ALL current data. Continue?')"
            {
                label for="document" { "Paste a backup file to import" }
                textarea id="document" name="document" rows="4" required {}
                button type="submit" { "Import data" }
            }

            form method="post" action="/data/clear"
                onsubmit="return confirm('Delete ALL application data? This cannot be undone.')"
            {
                button type="submit" { "Clear all data" }
            }
        }

        @if ocr_enabled {
            section class="card" id="ocr" {
                h2 { "Extract text from an image" }
                input type="file" id="ocr-file" accept="image/*";
                pre id="ocr-result" {}
                script { (PreEscaped(OCR_SCRIPT)) }
            }
        }
    }
}
