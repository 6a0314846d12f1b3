//! Recipe Import from Web Pages
//!
//! Reads the schema.org `Recipe` that most recipe sites embed as
//! `application/ld+json`. Only compiled with the `scrape` feature.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use super::api::RecipeApi;
use crate::domain::{DomainError, DomainResult};
use crate::repository::{extension_from_url, ImageStore};

/// Fields extracted from a page, before any download
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_url: Option<String>,
}

/// What the New Recipe form gets filled with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    /// Downloaded copy inside the owned image directory
    pub image_path: Option<String>,
}

/// Fetch `url`, extract its recipe and download the picture.
/// A failed picture download is logged and skipped.
pub async fn import_from_url(
    api: &RecipeApi,
    images: &ImageStore,
    url: &str,
) -> DomainResult<ImportedRecipe> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(DomainError::InvalidInput(
            "URL must start with http:// or https://".to_string(),
        ));
    }

    let html = api.get_text(url).await?;
    let scraped = extract_recipe(&html)?
        .ok_or_else(|| DomainError::NotFound("No recipe found on this page".to_string()))?;
    log::info!("Scraped '{}' from {}", scraped.title, url);

    let image_path = match scraped.image_url.as_deref() {
        Some(image_url) => match download_image(api, images, image_url).await {
            Ok(path) => Some(path.to_string_lossy().into_owned()),
            Err(e) => {
                log::warn!("Image download failed for {}: {}", image_url, e);
                None
            }
        },
        None => None,
    };

    Ok(ImportedRecipe {
        name: scraped.title,
        ingredients: scraped.ingredients,
        instructions: scraped.instructions,
        image_path,
    })
}

async fn download_image(api: &RecipeApi, images: &ImageStore, url: &str) -> DomainResult<PathBuf> {
    let bytes = api.get_bytes(url).await?;
    images.store_bytes(&bytes, &extension_from_url(url)).await
}

/// First schema.org Recipe in the page's JSON-LD blocks
pub fn extract_recipe(html: &str) -> DomainResult<Option<ScrapedRecipe>> {
    let script = Regex::new(
        r#"(?is)<script[^>]*type\s*=\s*["']?application/ld\+json["']?[^>]*>(.*?)</script>"#,
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    for caps in script.captures_iter(html) {
        let Some(body) = caps.get(1) else { continue };
        let json: Value = match serde_json::from_str(body.as_str().trim()) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Skipping unparsable JSON-LD block: {}", e);
                continue;
            }
        };
        if let Some(node) = find_recipe_node(&json) {
            return Ok(Some(read_recipe(node)));
        }
    }
    Ok(None)
}

fn is_recipe_type(node: &Value) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == "Recipe",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Recipe")),
        _ => false,
    }
}

fn find_recipe_node(json: &Value) -> Option<&Value> {
    match json {
        Value::Array(items) => items.iter().find_map(find_recipe_node),
        Value::Object(map) => {
            if is_recipe_type(json) {
                return Some(json);
            }
            map.get("@graph").and_then(find_recipe_node)
        }
        _ => None,
    }
}

fn read_recipe(node: &Value) -> ScrapedRecipe {
    let ingredients = match node.get("recipeIngredient").or_else(|| node.get("ingredients")) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(clean_text)
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => vec![clean_text(s)],
        _ => Vec::new(),
    };

    let mut steps = Vec::new();
    if let Some(instructions) = node.get("recipeInstructions") {
        collect_steps(instructions, &mut steps);
    }

    ScrapedRecipe {
        title: node
            .get("name")
            .and_then(Value::as_str)
            .map(clean_text)
            .unwrap_or_default(),
        ingredients,
        instructions: steps.join("\n"),
        image_url: node.get("image").and_then(image_url),
    }
}

/// Flatten strings, HowToStep and HowToSection into lines
fn collect_steps(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.extend(
            clean_text(s)
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        ),
        Value::Array(items) => items.iter().for_each(|item| collect_steps(item, out)),
        Value::Object(map) => {
            if let Some(elements) = map.get("itemListElement") {
                collect_steps(elements, out);
            } else if let Some(text) = map.get("text").or_else(|| map.get("name")) {
                collect_steps(text, out);
            }
        }
        _ => {}
    }
}

fn image_url(value: &Value) -> Option<String> {
    let url = match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Array(items) => items.iter().find_map(image_url),
        Value::Object(map) => map.get("url").and_then(image_url),
        _ => None,
    }?;
    if url.starts_with("//") {
        Some(format!("https:{}", url))
    } else if url.starts_with("http://") || url.starts_with("https://") {
        Some(url)
    } else {
        None
    }
}

/// Strip tags, decode entities and collapse runs of spaces
fn clean_text(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => stripped.push(c),
            _ => {}
        }
    }
    decode_entities(&stripped)
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let decoded = tail.find(';').filter(|&end| end <= 10).and_then(|end| {
            let entity = &tail[1..end];
            let c = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            }?;
            Some((c, end))
        });
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(json_ld: &str) -> String {
        format!(
            r#"<html><head><script type="application/ld+json">{}</script></head><body></body></html>"#,
            json_ld
        )
    }

    #[test]
    fn test_extracts_plain_recipe() {
        let html = page(
            r#"{"@context":"https://schema.org","@type":"Recipe","name":"Banana Bread",
                "recipeIngredient":["3 bananas","2 cups flour"],
                "recipeInstructions":"Mash.\nBake.","image":"https://x.com/bread.jpg"}"#,
        );
        let recipe = extract_recipe(&html).unwrap().unwrap();
        assert_eq!(recipe.title, "Banana Bread");
        assert_eq!(recipe.ingredients, vec!["3 bananas", "2 cups flour"]);
        assert_eq!(recipe.instructions, "Mash.\nBake.");
        assert_eq!(recipe.image_url.as_deref(), Some("https://x.com/bread.jpg"));
    }

    #[test]
    fn test_extracts_from_graph_with_howto_steps() {
        let html = page(
            r#"{"@context":"https://schema.org","@graph":[
                {"@type":"WebSite","name":"Site"},
                {"@type":["Recipe","NewsArticle"],"name":"Pancakes &amp; Syrup",
                 "recipeIngredient":["1 egg"],
                 "recipeInstructions":[
                    {"@type":"HowToSection","name":"Batter","itemListElement":[
                        {"@type":"HowToStep","text":"Whisk <b>everything</b>."}]},
                    {"@type":"HowToStep","text":"Fry."}],
                 "image":{"@type":"ImageObject","url":"//cdn.x.com/p.png"}}]}"#,
        );
        let recipe = extract_recipe(&html).unwrap().unwrap();
        assert_eq!(recipe.title, "Pancakes & Syrup");
        assert_eq!(recipe.instructions, "Whisk everything.\nFry.");
        assert_eq!(recipe.image_url.as_deref(), Some("https://cdn.x.com/p.png"));
    }

    #[test]
    fn test_extracts_from_top_level_array() {
        let html = format!(
            "{}{}",
            page(r#"{"@type":"Organization","name":"Org"}"#),
            page(r#"[{"@type":"BreadcrumbList"},{"@type":"Recipe","name":"Soup","image":["https://a/1.jpg","https://a/2.jpg"]}]"#)
        );
        let recipe = extract_recipe(&html).unwrap().unwrap();
        assert_eq!(recipe.title, "Soup");
        assert_eq!(recipe.image_url.as_deref(), Some("https://a/1.jpg"));
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_page_without_recipe() {
        let html = page(r#"{"@type":"WebPage"}"#);
        assert_eq!(extract_recipe(&html).unwrap(), None);
        assert_eq!(extract_recipe("<p>plain</p>").unwrap(), None);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("Salt &amp; pepper &#8211; &#x27;fresh&#x27;"), "Salt & pepper – 'fresh'");
        assert_eq!(decode_entities("R&D &unknown; &"), "R&D &unknown; &");
    }
}
