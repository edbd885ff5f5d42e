//! JSON output shapes.

use serde::Serialize;

use bouquet_composer::Bouquet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemCountDto {
    pub species: char,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BouquetDto {
    pub design: String,
    pub stems: Vec<StemCountDto>,
}

impl From<&Bouquet> for BouquetDto {
    fn from(bouquet: &Bouquet) -> Self {
        Self {
            design: bouquet.design.to_string(),
            stems: bouquet
                .stems()
                .iter()
                .map(|taken| StemCountDto {
                    species: taken.stem.species(),
                    count: taken.count,
                })
                .collect(),
        }
    }
}
