use crate::format::{format_price, format_surface, html_attr, html_escape};
use crate::home::Listing;

pub const FEATURED_EMPTY: &str = "No featured properties at the moment.";
pub const RECENT_EMPTY: &str = "No properties available at the moment.";

/// Link target for a property's detail page.
pub fn detail_href(id: i64) -> String {
    format!("/properties/{}", id)
}

pub fn render_listing_card(listing: &Listing, currency: &str) -> String {
    let p = &listing.property;
    let badge = if p.featured {
        r#"<span class="badge">Featured</span>"#
    } else {
        ""
    };
    format!(
        r#"<article class="card">
  <a href="{href}" class="card-img"><img src="{src}" alt="{alt}" loading="lazy" />{badge}</a>
  <div class="card-body">
    <div class="price">{price} <span class="per">/ month</span></div>
    <h3><a href="{href}">{title}</a></h3>
    <div class="location">{city}</div>
    <ul class="specs">
      <li class="type">{kind}</li>
      <li>{rooms} rooms</li>
      <li>{baths} baths</li>
      <li>{surface}</li>
    </ul>
    <a class="btn" href="{href}">View details</a>
  </div>
</article>
"#,
        href = detail_href(p.id),
        src = html_attr(&listing.image_src),
        alt = html_attr(&p.title),
        badge = badge,
        price = html_escape(&format_price(p.price, currency)),
        title = html_escape(&p.title),
        city = html_escape(&p.city),
        kind = html_escape(p.type_label()),
        rooms = p.rooms,
        baths = p.bathrooms,
        surface = format_surface(p.surface),
    )
}

/// A grid of cards, or the empty-state paragraph when there is nothing to show.
pub fn render_grid(listings: &[Listing], currency: &str, empty_message: &str) -> String {
    if listings.is_empty() {
        return format!(r#"<p class="empty">{}</p>"#, html_escape(empty_message));
    }
    let mut out = String::from("<div class=\"grid\">\n");
    for l in listings {
        out.push_str(&render_listing_card(l, currency));
    }
    out.push_str("</div>");
    out
}

pub fn render_featured_section(listings: &[Listing], currency: &str) -> String {
    format!(
        r#"<section class="featured">
  <h2>Featured properties</h2>
  {}
</section>"#,
        render_grid(listings, currency, FEATURED_EMPTY)
    )
}

pub fn render_recent_section(listings: &[Listing], currency: &str) -> String {
    format!(
        r#"<section class="recent">
  <h2>Latest listings</h2>
  {}
  <p class="more"><a class="btn btn-outline" href="/properties">See all properties</a></p>
</section>"#,
        render_grid(listings, currency, RECENT_EMPTY)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Property, PropertyStatus};
    use chrono::NaiveDateTime;

    fn listing(title: &str, kind: &str) -> Listing {
        Listing {
            property: Property {
                id: 7,
                title: title.into(),
                city: "Nice".into(),
                property_type: kind.into(),
                price: 250000.0,
                rooms: 4,
                bathrooms: 2,
                surface: 110.0,
                status: PropertyStatus::Available,
                featured: true,
                created_at: NaiveDateTime::default(),
            },
            image_src: "/uploads/7/a.jpg".into(),
        }
    }

    #[test]
    fn card_carries_summary_and_link() {
        let html = render_listing_card(&listing("Sea view", "villa"), "€");
        assert!(html.contains("href=\"/properties/7\""));
        assert!(html.contains("src=\"/uploads/7/a.jpg\""));
        assert!(html.contains("250 000 €"));
        assert!(html.contains("<li class=\"type\">Villa</li>"));
        assert!(html.contains("4 rooms"));
        assert!(html.contains("2 baths"));
        assert!(html.contains("110 m²"));
        assert!(html.contains("Nice"));
    }

    #[test]
    fn card_escapes_title_and_unknown_type() {
        let html = render_listing_card(&listing("<script>x</script>", "<boat>"), "€");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("<li class=\"type\">&lt;boat&gt;</li>"));
    }

    #[test]
    fn empty_grid_shows_message() {
        let html = render_featured_section(&[], "€");
        assert!(html.contains(FEATURED_EMPTY));
        assert!(!html.contains("class=\"grid\""));

        let html = render_recent_section(&[], "€");
        assert!(html.contains(RECENT_EMPTY));
    }

    #[test]
    fn grid_has_one_card_per_listing() {
        let items = vec![listing("a", "house"), listing("b", "room")];
        let html = render_grid(&items, "€", RECENT_EMPTY);
        assert_eq!(html.matches("<article class=\"card\">").count(), 2);
        assert!(!html.contains(RECENT_EMPTY));
    }
}
