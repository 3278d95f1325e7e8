use super::Triplestore;
use crate::errors::TriplestoreError;
use log::debug;
use oxrdf::TripleRef;
use oxrdfio::{RdfFormat, RdfSerializer};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

impl Triplestore {
    /// Writes all triples in a stable order so that identical graphs give identical files.
    pub fn write_triples<W: Write>(
        &self,
        buf: &mut W,
        format: RdfFormat,
    ) -> Result<(), TriplestoreError> {
        let mut serializer = RdfSerializer::from_format(format);
        for (prefix, iri) in &self.prefixes {
            serializer = serializer
                .with_prefix(prefix, iri)
                .map_err(TriplestoreError::InvalidPrefixIri)?;
        }
        let mut triples: Vec<(String, TripleRef<'_>)> =
            self.graph.iter().map(|t| (t.to_string(), t)).collect();
        triples.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut writer = serializer.for_writer(buf);
        for (_, t) in triples {
            writer
                .serialize_triple(t)
                .map_err(TriplestoreError::WriteTriplesError)?;
        }
        writer.finish().map_err(TriplestoreError::WriteTriplesError)?;
        Ok(())
    }

    pub fn write_triples_to_path(
        &self,
        path: &Path,
        format: RdfFormat,
    ) -> Result<(), TriplestoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(TriplestoreError::FolderCreateIOError)?;
            }
        }
        let file = File::create(path).map_err(TriplestoreError::WriteTriplesError)?;
        let mut writer = BufWriter::new(file);
        self.write_triples(&mut writer, format)?;
        writer.flush().map_err(TriplestoreError::WriteTriplesError)?;
        debug!("Wrote {} triples to {}", self.len(), path.to_string_lossy());
        Ok(())
    }

    pub fn to_turtle(&self) -> Result<String, TriplestoreError> {
        let mut buf = vec![];
        self.write_triples(&mut buf, RdfFormat::Turtle)?;
        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}
