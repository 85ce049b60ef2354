// src/models/envelope.rs

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u64 = 10;

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

// Parâmetros `?limit=&offset=` das listagens.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Resposta paginada: o total é contado antes do recorte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    pub data: Vec<T>,
}

impl<T> ListEnvelope<T> {
    /// Recorta `[offset, offset + limit)` da coleção completa.
    pub fn paginate(records: Vec<T>, page: Pagination) -> Self {
        let total = records.len() as u64;
        let skip = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit).unwrap_or(usize::MAX);

        let data = records.into_iter().skip(skip).take(take).collect();

        Self {
            total,
            limit: page.limit,
            offset: page.offset,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEnvelope<T> {
    pub data: T,
    pub links: Vec<Link>,
}

impl<T> ItemEnvelope<T> {
    /// Anexa os links self/update/delete do item.
    pub fn with_links(data: T, href: &str) -> Self {
        let links = ["self", "update", "delete"]
            .into_iter()
            .map(|rel| Link {
                rel: rel.to_string(),
                href: href.to_string(),
            })
            .collect();

        Self { data, links }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(limit: u64, offset: u64) -> Pagination {
        Pagination { limit, offset }
    }

    #[test]
    fn total_counts_the_whole_collection() {
        let envelope = ListEnvelope::paginate((1..=25).collect::<Vec<_>>(), page(10, 20));
        assert_eq!(envelope.total, 25);
        assert_eq!(envelope.data, vec![21, 22, 23, 24, 25]);
        assert_eq!(envelope.limit, 10);
        assert_eq!(envelope.offset, 20);
    }

    #[test]
    fn slice_length_is_clamped() {
        for (limit, offset) in [(0, 0), (3, 0), (10, 5), (10, 7), (4, 100)] {
            let envelope = ListEnvelope::paginate(vec![0u8; 7], page(limit, offset));
            let expected = limit.min(7u64.saturating_sub(offset));
            assert_eq!(envelope.data.len() as u64, expected, "limit={limit} offset={offset}");
        }
    }

    #[test]
    fn item_links_share_the_item_url() {
        let envelope = ItemEnvelope::with_links("x", "/api/v1/ControllerMoto/3");
        let rels: Vec<_> = envelope.links.iter().map(|l| l.rel.as_str()).collect();
        assert_eq!(rels, ["self", "update", "delete"]);
        assert!(envelope.links.iter().all(|l| l.href == "/api/v1/ControllerMoto/3"));
    }

    #[test]
    fn pagination_defaults() {
        let parsed: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.limit, 10);
        assert_eq!(parsed.offset, 0);
    }
}
