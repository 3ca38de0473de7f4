use crate::domain::model::{Publication, RenderedPublications, SparqlTerm};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, StitchError};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

pub const DBLP_SPARQL_ENDPOINT: &str = "https://sparql.dblp.org/sparql";

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    bindings: Vec<HashMap<String, SparqlTerm>>,
}

/// Pulls one author's publication list from the DBLP SPARQL endpoint and
/// writes it next to the site as JSON and/or CSV.
pub struct PublicationsPipeline<S: Storage> {
    storage: S,
    client: Client,
    endpoint: String,
    author_id: String,
}

impl<S: Storage> PublicationsPipeline<S> {
    pub fn new(storage: S, endpoint: String, author_id: String) -> Self {
        Self {
            storage,
            client: Client::new(),
            endpoint,
            author_id,
        }
    }

    fn sparql_query(&self) -> String {
        format!(
            r#"
PREFIX dblp: <http://dblp.org/rdf/schema#>
PREFIX foaf: <http://xmlns.com/foaf/0.1/>
PREFIX dc: <http://purl.org/dc/elements/1.1/>

SELECT ?title ?year ?url ?bibtex ?pages ?venue ?type ?id
WHERE {{
    ?pub dblp:authoredBy <https://dblp.org/pid/{author_id}> ;
         dc:title ?title ;
         dblp:year ?year ;
         dblp:publishedIn ?venue ;
         dblp:type ?type ;
         dblp:primaryFullTextUrl ?url .
    OPTIONAL {{ ?pub dblp:bibtex ?bibtex }}
    OPTIONAL {{ ?pub dblp:page ?pages }}
    BIND(REPLACE(STR(?pub), "http://dblp.org/rec/", "") AS ?id)
}}
ORDER BY DESC(?year)
"#,
            author_id = self.author_id
        )
    }

    pub async fn fetch(&self) -> Result<Vec<Publication>> {
        let query = self.sparql_query();
        tracing::debug!("Querying SPARQL endpoint: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query.as_str())])
            .header("Accept", "application/sparql-results+json")
            .send()
            .await?;

        tracing::debug!("SPARQL response status: {}", response.status());

        if !response.status().is_success() {
            return Err(StitchError::HttpStatusError {
                status: response.status().as_u16(),
            });
        }

        let body: SparqlResponse = response.json().await?;
        let papers: Vec<Publication> = body
            .results
            .bindings
            .iter()
            .map(Publication::from_binding)
            .collect();

        tracing::debug!("Fetched {} publications", papers.len());
        Ok(papers)
    }

    pub fn render(&self, records: Vec<Publication>) -> Result<RenderedPublications> {
        let json_output = serde_json::to_string_pretty(&records)?;

        let csv_output = {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for record in &records {
                writer.serialize(record)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| StitchError::ProcessingError {
                    message: format!("CSV writer flush failed: {}", e),
                })?;
            String::from_utf8(bytes)?
        };

        Ok(RenderedPublications {
            records,
            json_output,
            csv_output,
        })
    }

    pub async fn save(
        &self,
        rendered: &RenderedPublications,
        basename: &str,
        formats: &[String],
    ) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for format in formats {
            let (path, data) = match format.as_str() {
                "json" => (
                    format!("{}.json", basename),
                    rendered.json_output.as_bytes(),
                ),
                "csv" => (format!("{}.csv", basename), rendered.csv_output.as_bytes()),
                other => {
                    return Err(StitchError::InvalidConfigValueError {
                        field: "formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format. Valid formats: json, csv".to_string(),
                    })
                }
            };

            tracing::debug!("Writing {} ({} bytes)", path, data.len());
            self.storage.write_file(&path, data).await?;
            written.push(path);
        }

        Ok(written)
    }
}
