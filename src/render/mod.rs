//! HTML rendering for the homepage. Everything here is pure string building;
//! data comes in already loaded through [`crate::home`].

pub mod listing;
pub mod sections;

pub use listing::{
    render_featured_section, render_grid, render_listing_card, render_recent_section,
    FEATURED_EMPTY, RECENT_EMPTY,
};
pub use sections::{render_hero, render_how_it_works, render_testimonials};

use crate::config::Site;
use crate::format::html_escape;
use crate::home::HomeData;

pub fn render_home_page(site: &Site, home: &HomeData) -> String {
    let body = [
        render_hero(&site.name),
        render_featured_section(&home.featured, &site.currency),
        render_recent_section(&home.recent, &site.currency),
        render_how_it_works(),
        render_testimonials(),
    ]
    .join("\n");
    layout(&site.name, &body)
}

fn layout(site_name: &str, body: &str) -> String {
    let name = html_escape(site_name);
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{name} | Homes for rent</title>
    <style>{css}</style>
  </head>
  <body>
    <header class="nav"><a class="brand" href="/">{name}</a><a href="/properties">Properties</a></header>
    <main>
{body}
    </main>
    <footer class="site-footer">&copy; {name}</footer>
  </body>
</html>"#,
        name = name,
        css = STYLE,
        body = body,
    )
}

const STYLE: &str = r#"
:root { --fg: #222; --bg: #fff; --muted: #666; --accent: #0b7285; --line: #e5e5e5; }
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--fg);
  font: 15px/1.6 -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif; }
a { color: var(--accent); text-decoration: none; }
.nav { display: flex; gap: 24px; align-items: center; padding: 14px 24px; border-bottom: 1px solid var(--line); }
.nav .brand { font-weight: 700; font-size: 1.2rem; color: var(--fg); }
main { max-width: 1180px; margin: 0 auto; padding: 0 16px; }
section { margin: 40px 0; }
.hero { text-align: center; padding: 48px 16px; background: #f3f8f9; border-radius: 12px; }
.search { display: flex; flex-wrap: wrap; gap: 8px; justify-content: center; margin-top: 16px; }
.search input, .search select { padding: 8px; border: 1px solid var(--line); border-radius: 6px; }
.btn { display: inline-block; background: var(--accent); color: #fff; border: 0; padding: 8px 16px; border-radius: 6px; cursor: pointer; }
.btn-outline { background: transparent; color: var(--accent); border: 1px solid var(--accent); }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 20px; }
.card { border: 1px solid var(--line); border-radius: 10px; overflow: hidden; }
.card-img { display: block; position: relative; }
.card-img img { width: 100%; height: 180px; object-fit: cover; display: block; }
.badge { position: absolute; top: 10px; left: 10px; background: var(--accent); color: #fff; padding: 2px 8px; border-radius: 4px; font-size: .8rem; }
.card-body { padding: 14px; }
.price { font-weight: 700; font-size: 1.2rem; }
.per, .location { color: var(--muted); }
.specs { display: flex; flex-wrap: wrap; gap: 10px; list-style: none; padding: 0; color: var(--muted); font-size: .9rem; }
.empty { color: var(--muted); text-align: center; padding: 24px; }
.more { text-align: center; }
.steps, .quotes { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 20px; }
.step-num { font-size: 2rem; font-weight: 700; color: var(--accent); }
.testimonial { margin: 0; padding: 16px; border-left: 3px solid var(--accent); background: #fafafa; }
.testimonial footer { color: var(--muted); font-size: .9rem; }
.site-footer { text-align: center; color: var(--muted); padding: 24px; border-top: 1px solid var(--line); }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, Config};

    #[test]
    fn empty_home_renders_both_empty_states() {
        let cfg: Config = serde_yaml::from_str(config::example()).unwrap();
        let html = render_home_page(&cfg.site, &HomeData::default());
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains(FEATURED_EMPTY));
        assert!(html.contains(RECENT_EMPTY));
        assert!(html.contains("How it works"));
        assert!(html.contains("What our users say"));
        assert!(html.contains("<title>RentEasy | Homes for rent</title>"));
    }
}
