use super::Triplestore;
use crate::errors::TriplestoreError;

use log::debug;
use oxrdf::Triple;
use oxrdfio::{RdfFormat, RdfParser};
use std::path::Path;
use std::time::Instant;

impl Triplestore {
    pub fn read_triples_from_path(
        &mut self,
        path: &Path,
        rdf_format: Option<RdfFormat>,
        base_iri: Option<String>,
    ) -> Result<(), TriplestoreError> {
        let now = Instant::now();
        debug!(
            "Started reading triples from path {}",
            path.to_string_lossy()
        );
        if !path.exists() {
            return Err(TriplestoreError::PathDoesNotExist(
                path.to_string_lossy().to_string(),
            ));
        }
        let rdf_format = if let Some(rdf_format) = rdf_format {
            rdf_format
        } else if path.extension() == Some("nt".as_ref()) {
            RdfFormat::NTriples
        } else if path.extension() == Some("xml".as_ref()) || path.extension() == Some("rdf".as_ref()) {
            RdfFormat::RdfXml
        } else {
            RdfFormat::Turtle
        };
        let bytes = std::fs::read(path).map_err(TriplestoreError::ReadTriplesFileError)?;
        let res = self.read_triples(&bytes, rdf_format, base_iri);
        debug!(
            "Reading triples from path took {} seconds",
            now.elapsed().as_secs_f32()
        );
        res
    }

    pub fn read_triples_from_string(
        &mut self,
        s: &str,
        rdf_format: RdfFormat,
        base_iri: Option<String>,
    ) -> Result<(), TriplestoreError> {
        self.read_triples(s.as_bytes(), rdf_format, base_iri)
    }

    /// Parses all statements of the default graph in `slice`.
    /// Nothing is added when the document has a syntax error.
    pub fn read_triples(
        &mut self,
        slice: &[u8],
        rdf_format: RdfFormat,
        base_iri: Option<String>,
    ) -> Result<(), TriplestoreError> {
        let mut parser = RdfParser::from_format(rdf_format);
        if let Some(base_iri) = base_iri {
            parser = parser
                .with_base_iri(base_iri)
                .map_err(TriplestoreError::InvalidBaseIri)?;
        }
        let mut triples = vec![];
        for q in parser.for_reader(slice) {
            let q = q.map_err(TriplestoreError::TurtleParsingError)?;
            if q.graph_name.is_default_graph() {
                triples.push(Triple::from(q));
            }
        }
        debug!("Parsed {} triples", triples.len());
        self.extend(triples);
        Ok(())
    }

    pub fn from_turtle(s: &str) -> Result<Triplestore, TriplestoreError> {
        let mut ts = Triplestore::new();
        ts.read_triples_from_string(s, RdfFormat::Turtle, None)?;
        Ok(ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNode;
    use representation::vocab::dcat;

    #[test]
    fn test_read_turtle_string() {
        let ts = Triplestore::from_turtle(
            r#"
            @prefix dcat: <http://www.w3.org/ns/dcat#> .
            <http://example.net/d1> a dcat:Dataset ;
                dcat:keyword "health" .
            "#,
        )
        .unwrap();
        assert_eq!(ts.len(), 2);
        assert_eq!(
            ts.subjects_of_type(dcat::DATASET),
            vec![NamedNode::new_unchecked("http://example.net/d1")]
        );
    }

    #[test]
    fn test_relative_iris_resolve_against_base() {
        let mut ts = Triplestore::new();
        ts.read_triples_from_string(
            "<x> a <http://www.w3.org/ns/dcat#Dataset> .",
            RdfFormat::Turtle,
            Some("http://example.net/".to_string()),
        )
        .unwrap();
        assert_eq!(
            ts.subjects_of_type(dcat::DATASET),
            vec![NamedNode::new_unchecked("http://example.net/x")]
        );
    }

    #[test]
    fn test_syntax_error_leaves_store_untouched() {
        let mut ts = Triplestore::new();
        let res = ts.read_triples_from_string(
            "<http://example.net/a> a <http://example.net/B> .\n<http://example.net/c> a",
            RdfFormat::Turtle,
            None,
        );
        assert!(matches!(res, Err(TriplestoreError::TurtleParsingError(_))));
        assert!(ts.is_empty());
    }

    #[test]
    fn test_missing_path() {
        let mut ts = Triplestore::new();
        let res = ts.read_triples_from_path(Path::new("does/not/exist.ttl"), None, None);
        assert!(matches!(res, Err(TriplestoreError::PathDoesNotExist(_))));
    }
}
