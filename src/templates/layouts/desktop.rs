use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(BASE_CSS)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#0284c7"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M3 7h11v10H3z" {}
                      path d="M14 10h4l3 3v4h-7" {}
                      path d="M7 19a2 2 0 1 0 0 -4a2 2 0 0 0 0 4" {}
                      path d="M17 19a2 2 0 1 0 0 -4a2 2 0 0 0 0 4" {}
                  }
                  h3 { "Delivery Ledger" }
                  nav {
                      ul {
                          li { a href="/" { "Worksheet" } }
                          li { a href="/drivers" { "Drivers" } }
                      }
                  }
              }
                (content)
                footer class="footer" { "Delivery Ledger" }
            }
        }
    }
}

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; color: #111827; margin: 0; background: #f8fafc; }
header { display: flex; gap: 1rem; align-items: center; background: #fff; }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main.container { max-width: 1100px; margin: 0 auto; padding: 1.5rem; }
.card { background: #fff; border-radius: 12px; padding: 1rem 1.25rem; margin-bottom: 1.25rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.stats { display: flex; gap: 1rem; flex-wrap: wrap; }
.stat { flex: 1; min-width: 140px; border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; text-align: center; }
.stat .value { font-size: 1.5rem; font-weight: bold; color: #0284c7; }
.stat .label { font-size: .85rem; color: #6b7280; }
table.records { width: 100%; border-collapse: collapse; font-size: .9rem; }
table.records th, table.records td { border: 1px solid #d1d5db; padding: .5rem .75rem; text-align: left; vertical-align: top; }
.notice { padding: .75rem 1rem; border-radius: 8px; margin-bottom: .5rem; }
.notice-success { background: #dcfce7; color: #166534; }
.notice-error { background: #fee2e2; color: #991b1b; }
.notice-info { background: #e0f2fe; color: #075985; }
.read-only { background: #fef9c3; color: #854d0e; text-align: center; padding: 1rem; border-radius: 8px; }
.inline { display: inline; }
.footer { text-align: center; font-size: .8rem; color: #6b7280; padding: 2rem 0; }
"#;
