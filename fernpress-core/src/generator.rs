//! Sitemap and robots.txt generation.
//!
//! Plain formatting over the content model; the driver writes the
//! results next to the rendered pages.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::models::ContentSet;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render sitemap.xml for the content set
///
/// The site root is listed first, then one `<url>` per entry. Entries
/// with a `date` carry it as `<lastmod>`.
pub fn sitemap_xml(site_url: &str, set: &ContentSet) -> String {
    let base = site_url.trim_end_matches('/');

    let mut xml = String::with_capacity(256 + set.len() * 96);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_NS}\">\n"));

    push_url(&mut xml, &format!("{base}/"), None);
    for entry in &set.entries {
        push_url(
            &mut xml,
            &format!("{base}{}", entry.url),
            entry.metadata.date.as_deref(),
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Render an allow-all robots.txt pointing at the sitemap
pub fn robots_txt(site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    format!("User-agent: *\nAllow: /\n\nSitemap: {base}/sitemap.xml\n")
}

fn push_url(xml: &mut String, loc: &str, lastmod: Option<&str>) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(loc)));
    if let Some(lastmod) = lastmod {
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", xml_escape(lastmod)));
    }
    xml.push_str("  </url>\n");
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentEntry, Metadata, ROOT_DIRECTORY};

    fn entry(slug: &str, date: Option<&str>) -> ContentEntry {
        ContentEntry {
            slug: slug.to_string(),
            path: format!("{slug}.md"),
            url: format!("/{slug}"),
            directory: ROOT_DIRECTORY.to_string(),
            main_directory: ROOT_DIRECTORY.to_string(),
            depth: 0,
            content: String::new(),
            metadata: Metadata {
                title: slug.to_string(),
                date: date.map(str::to_string),
                ..Metadata::default()
            },
        }
    }

    #[test]
    fn test_sitemap_lists_root_and_entries() {
        let set = ContentSet::new(vec![entry("about", None), entry("post", Some("2025-01-02"))]);
        let xml = sitemap_xml("https://example.com/", &set);

        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert!(xml.contains("<loc>https://example.com/post</loc>"));
        assert!(xml.contains("<lastmod>2025-01-02</lastmod>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_sitemap_escapes_ampersands() {
        let mut e = entry("q", None);
        e.url = "/search&view".to_string();
        let xml = sitemap_xml("https://example.com", &ContentSet::new(vec![e]));
        assert!(xml.contains("https://example.com/search&amp;view"));
    }

    #[test]
    fn test_robots() {
        let robots = robots_txt("https://example.com");
        assert!(robots.contains("User-agent: *"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
