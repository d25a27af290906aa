//! Writes a deterministic sample `catalog.csv` for demos and manual testing.
//!
//! The shape mirrors a real shop export: one row per (year, make, model,
//! product type), with product URLs living under a per-model directory so
//! the browse-all link resolves to something sensible.

use serde::Serialize;

#[derive(Serialize)]
struct CatalogRow<'a> {
    #[serde(rename = "Year")]
    year: u16,
    #[serde(rename = "Make")]
    make: &'a str,
    #[serde(rename = "Model")]
    model: &'a str,
    #[serde(rename = "Product Type")]
    product_type: &'a str,
    #[serde(rename = "URL")]
    url: String,
}

fn slug(s: &str) -> String {
    s.to_ascii_lowercase().replace(' ', "-")
}

fn main() -> anyhow::Result<()> {
    let makes: &[(&str, &[&str])] = &[
        ("Ford", &["F150", "Ranger", "Mustang"]),
        ("Chevrolet", &["Silverado", "Colorado"]),
        ("Toyota", &["Tacoma", "Tundra", "4Runner"]),
        ("Honda", &["Ridgeline"]),
    ];
    let product_types = ["Bumper", "Grille", "Headlight", "Floor Mats", "Tonneau Cover"];

    let mut writer = csv::Writer::from_path("catalog.csv")?;
    let mut rows = 0usize;

    for year in 2018..=2024u16 {
        for &(make, models) in makes {
            for (m, model) in models.iter().copied().enumerate() {
                // Not every model exists in every year; skew the coverage so
                // the cascade has gaps to exercise.
                if usize::from(year) % models.len() == m && year < 2020 {
                    continue;
                }
                for product_type in product_types {
                    let url = format!(
                        "https://shop.example.com/{}/{}-{}/{}.html",
                        slug(make),
                        slug(model),
                        year,
                        slug(product_type),
                    );
                    writer.serialize(CatalogRow {
                        year,
                        make,
                        model,
                        product_type,
                        url,
                    })?;
                    rows += 1;
                }
            }
        }
    }

    writer.flush()?;
    println!("Wrote catalog.csv ({rows} rows)");
    Ok(())
}
