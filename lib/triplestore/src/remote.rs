use super::Triplestore;
use crate::errors::TriplestoreError;
use crate::http::HttpClient;
use log::{debug, info};
use oxrdfio::RdfFormat;
use spargebra::Query;
use std::time::{Duration, Instant};

pub const DEFAULT_ENDPOINT: &str = "https://datos.gob.es/virtuoso/sparql";
pub const DEFAULT_PUBLISHER_FILTER: &str = "ministerio de sanidad";

/// Builds the DESCRIBE query selecting datasets, their distributions and the
/// format and media type resources of those distributions, for publishers whose
/// name contains `publisher_filter` ignoring case.
pub fn describe_query(publisher_filter: &str) -> String {
    format!(
        r#"PREFIX dct: <http://purl.org/dc/terms/>
PREFIX dcat: <http://www.w3.org/ns/dcat#>
PREFIX foaf: <http://xmlns.com/foaf/0.1/>

DESCRIBE ?dataset ?distribution ?format ?media_type
WHERE {{
    ?dataset a dcat:Dataset ;
        dct:publisher ?publisher ;
        dcat:distribution ?distribution .
    ?publisher foaf:name ?publisher_name .
    OPTIONAL {{ ?distribution dct:format ?format }}
    OPTIONAL {{ ?distribution dcat:mediaType ?media_type }}
    FILTER (CONTAINS(LCASE(STR(?publisher_name)), {}))
}}"#,
        sparql_string_literal(&publisher_filter.to_lowercase())
    )
}

fn sparql_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Retrieves catalog descriptions from a SPARQL endpoint with a single DESCRIBE query.
#[derive(Clone, Debug)]
pub struct CatalogLoader {
    pub endpoint: String,
    pub publisher_filter: String,
    pub timeout: Option<Duration>,
    http: HttpClient,
}

impl CatalogLoader {
    pub fn new(endpoint: &str, publisher_filter: &str, http: HttpClient) -> CatalogLoader {
        CatalogLoader {
            endpoint: endpoint.to_string(),
            publisher_filter: publisher_filter.to_string(),
            timeout: None,
            http,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn query(&self) -> Result<String, TriplestoreError> {
        let query = describe_query(&self.publisher_filter);
        Query::parse(&query, None).map_err(TriplestoreError::QueryBuildError)?;
        Ok(query)
    }

    /// A failing endpoint or a body that is not Turtle is a retrieval error.
    pub fn retrieve(&self) -> Result<Triplestore, TriplestoreError> {
        let now = Instant::now();
        let query = self.query()?;
        info!(
            "Retrieving datasets from {} for publishers matching '{}'",
            self.endpoint, self.publisher_filter
        );
        let body = self
            .http
            .get_turtle(&self.endpoint, &[("query", query.as_str())], self.timeout)?;
        let mut ts = Triplestore::new();
        ts.read_triples_from_string(&body, RdfFormat::Turtle, None)
            .map_err(|e| TriplestoreError::RetrievalError {
                url: self.endpoint.clone(),
                message: format!("response is not valid Turtle: {}", e),
            })?;
        debug!(
            "Retrieved {} triples in {} seconds",
            ts.len(),
            now.elapsed().as_secs_f32()
        );
        Ok(ts)
    }
}
