use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A page with the shared fragment stitched in, ready to be written back.
#[derive(Debug, Clone)]
pub struct AssembledPage {
    pub path: String,
    pub html: String,
}

/// One publication record as returned by the DBLP SPARQL endpoint.
/// Bindings that are absent in a result row default to "N/A".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub year: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub bibtex: String,
    pub pages: String,
}

impl Publication {
    /// 從單筆 SPARQL binding 組出記錄，缺少的欄位以 "N/A" 補上
    pub fn from_binding(binding: &HashMap<String, SparqlTerm>) -> Self {
        let term = |key: &str| {
            binding
                .get(key)
                .map(|t| t.value.clone())
                .unwrap_or_else(|| "N/A".to_string())
        };

        Self {
            id: term("id"),
            title: term("title"),
            year: term("year"),
            venue: term("venue"),
            kind: term("type"),
            url: term("url"),
            bibtex: term("bibtex"),
            pages: term("pages"),
        }
    }
}

/// A single RDF term in a SPARQL JSON result binding.
#[derive(Debug, Clone, Deserialize)]
pub struct SparqlTerm {
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct RenderedPublications {
    pub records: Vec<Publication>,
    pub json_output: String,
    pub csv_output: String,
}
