use crate::format::html_escape;
use crate::model::PropertyType;

struct Step {
    title: &'static str,
    text: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        title: "Search",
        text: "Browse listings by city, type and budget to find places that fit.",
    },
    Step {
        title: "Visit",
        text: "Contact the owner and arrange a visit at a time that suits you.",
    },
    Step {
        title: "Move in",
        text: "Sign the lease, collect the keys and settle into your new home.",
    },
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    city: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Found a bright two-room flat in less than a week. The filters saved me hours.",
        name: "Claire M.",
        city: "Lyon",
    },
    Testimonial {
        quote: "Listing my studio took ten minutes and I had serious tenants by the weekend.",
        name: "Karim B.",
        city: "Marseille",
    },
    Testimonial {
        quote: "Clear prices, real photos, no surprises on the day of the visit.",
        name: "Sofia R.",
        city: "Bordeaux",
    },
];

pub fn render_hero(site_name: &str) -> String {
    let options: String = PropertyType::ALL
        .iter()
        .map(|t| format!(r#"<option value="{}">{}</option>"#, t.as_str(), t.label()))
        .collect();
    format!(
        r#"<section class="hero">
  <h1>Find your next rental with {name}</h1>
  <p>Apartments, houses, villas, studios and rooms across the country.</p>
  <form class="search" method="GET" action="/properties">
    <input type="text" name="city" placeholder="City" />
    <select name="property_type"><option value="">All types</option>{options}</select>
    <input type="number" name="min_price" placeholder="Min price" min="0" />
    <input type="number" name="max_price" placeholder="Max price" min="0" />
    <button class="btn" type="submit">Search</button>
  </form>
</section>"#,
        name = html_escape(site_name),
        options = options,
    )
}

pub fn render_how_it_works() -> String {
    let mut steps = String::new();
    for (i, s) in STEPS.iter().enumerate() {
        steps.push_str(&format!(
            r#"<div class="step"><div class="step-num">{}</div><h3>{}</h3><p>{}</p></div>"#,
            i + 1,
            s.title,
            s.text
        ));
    }
    format!(
        r#"<section class="how">
  <h2>How it works</h2>
  <div class="steps">{}</div>
</section>"#,
        steps
    )
}

pub fn render_testimonials() -> String {
    let mut items = String::new();
    for t in &TESTIMONIALS {
        items.push_str(&format!(
            r#"<blockquote class="testimonial"><p>“{}”</p><footer>{}, {}</footer></blockquote>"#,
            t.quote, t.name, t.city
        ));
    }
    format!(
        r#"<section class="testimonials">
  <h2>What our users say</h2>
  <div class="quotes">{}</div>
</section>"#,
        items
    )
}
