//! `VariantStore` over a SQLite database.
//!
//! The schema is owned by the ingestion side; this store only reads the
//! tables `chromosome`, `organism_annotation`, `gene`, `sample`, `effect`,
//! `variant`, `variant_in_sample` and `variant_annotation`. Natural order
//! is ascending `id`.

use crate::prelude::*;
use rusqlite::{params, params_from_iter, Connection, OpenFlags, OptionalExtension, Params, Row};
use std::path::Path;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens the database read-only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    fn query<T, P: Params>(
        &self,
        sql: &str,
        params: P,
        decode: fn(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params, decode)?;
        Ok(rows.collect::<rusqlite::Result<Vec<T>>>()?)
    }

    fn query_one<T, P: Params>(
        &self,
        sql: &str,
        params: P,
        decode: fn(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Option<T>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        Ok(stmt.query_row(params, decode).optional()?)
    }
}

const CHROMOSOME: &str = "SELECT id, chromosome, created_at FROM chromosome";
const ORGANISM: &str = "SELECT id, organism_code FROM organism_annotation";
const GENE: &str = "SELECT id, chromosome_id, gene_name, gene_start, gene_end FROM gene";
const SAMPLE: &str = "SELECT id, sample_name FROM sample";
const EFFECT: &str = "SELECT id, effect FROM effect";
const VARIANT: &str = r#"SELECT id, chromosome_id, pos, "ref", alt, filter FROM variant"#;
const VARIANT_IN_SAMPLE: &str = "SELECT vis.id, vis.sample_id, vis.variant_id, vis.dp, \
     vis.ref_dp, vis.alt_dp, vis.af FROM variant_in_sample vis";
const ANNOTATION: &str = "SELECT id, variant_id, effect_id, hgvs_c, hgvs_p, hgvs_p_1letter \
     FROM variant_annotation";

fn chromosome(row: &Row<'_>) -> rusqlite::Result<Chromosome> {
    Ok(Chromosome {
        id: row.get("id")?,
        chromosome: row.get("chromosome")?,
        created_at: row.get("created_at")?,
    })
}

fn organism(row: &Row<'_>) -> rusqlite::Result<OrganismAnnotation> {
    Ok(OrganismAnnotation {
        id: row.get("id")?,
        organism_code: row.get("organism_code")?,
    })
}

fn gene(row: &Row<'_>) -> rusqlite::Result<Gene> {
    Ok(Gene {
        id: row.get("id")?,
        chromosome_id: row.get("chromosome_id")?,
        gene_name: row.get("gene_name")?,
        gene_start: row.get("gene_start")?,
        gene_end: row.get("gene_end")?,
    })
}

fn sample(row: &Row<'_>) -> rusqlite::Result<Sample> {
    Ok(Sample {
        id: row.get("id")?,
        sample_name: row.get("sample_name")?,
    })
}

fn effect(row: &Row<'_>) -> rusqlite::Result<Effect> {
    Ok(Effect {
        id: row.get("id")?,
        effect: row.get("effect")?,
    })
}

fn variant(row: &Row<'_>) -> rusqlite::Result<Variant> {
    Ok(Variant {
        id: row.get("id")?,
        chromosome_id: row.get("chromosome_id")?,
        pos: row.get("pos")?,
        reference: row.get("ref")?,
        alt: row.get("alt")?,
        filter: row.get("filter")?,
    })
}

fn variant_in_sample(row: &Row<'_>) -> rusqlite::Result<VariantInSample> {
    Ok(VariantInSample {
        id: row.get(0)?,
        sample_id: row.get(1)?,
        variant_id: row.get(2)?,
        dp: row.get(3)?,
        ref_dp: row.get(4)?,
        alt_dp: row.get(5)?,
        af: row.get(6)?,
    })
}

fn annotation(row: &Row<'_>) -> rusqlite::Result<VariantAnnotation> {
    Ok(VariantAnnotation {
        id: row.get("id")?,
        variant_id: row.get("variant_id")?,
        effect_id: row.get("effect_id")?,
        hgvs_c: row.get("hgvs_c")?,
        hgvs_p: row.get("hgvs_p")?,
        hgvs_p_1letter: row.get("hgvs_p_1letter")?,
    })
}

impl VariantStore for SqliteStore {
    fn chromosomes(&self) -> Result<Vec<Chromosome>> {
        self.query(&format!("{} ORDER BY id", CHROMOSOME), [], chromosome)
    }

    fn organisms(&self) -> Result<Vec<OrganismAnnotation>> {
        self.query(&format!("{} ORDER BY id", ORGANISM), [], organism)
    }

    fn genes(&self) -> Result<Vec<Gene>> {
        self.query(&format!("{} ORDER BY id", GENE), [], gene)
    }

    fn sample(&self, id: SampleId) -> Result<Option<Sample>> {
        self.query_one(&format!("{} WHERE id = ?1", SAMPLE), params![id], sample)
    }

    fn sample_by_name(&self, name: &str) -> Result<Option<Sample>> {
        self.query_one(
            &format!("{} WHERE sample_name = ?1 ORDER BY id LIMIT 1", SAMPLE),
            params![name],
            sample,
        )
    }

    fn effect(&self, id: EffectId) -> Result<Option<Effect>> {
        self.query_one(&format!("{} WHERE id = ?1", EFFECT), params![id], effect)
    }

    fn variant(&self, id: VariantId) -> Result<Option<Variant>> {
        self.query_one(&format!("{} WHERE id = ?1", VARIANT), params![id], variant)
    }

    fn variants_in_sample(&self, sample: SampleId) -> Result<Vec<VariantInSample>> {
        self.query(
            &format!("{} WHERE vis.sample_id = ?1 ORDER BY vis.id", VARIANT_IN_SAMPLE),
            params![sample],
            variant_in_sample,
        )
    }

    fn variants_in_sample_on(&self, chromosome: ChromosomeId) -> Result<Vec<VariantInSample>> {
        self.query(
            &format!(
                "{} JOIN variant v ON v.id = vis.variant_id \
                 WHERE v.chromosome_id = ?1 ORDER BY vis.id",
                VARIANT_IN_SAMPLE
            ),
            params![chromosome],
            variant_in_sample,
        )
    }

    fn annotations_for(&self, variants: &[VariantId]) -> Result<Vec<VariantAnnotation>> {
        if variants.is_empty() {
            return Ok(vec![]);
        }
        let placeholders = vec!["?"; variants.len()].join(", ");
        self.query(
            &format!(
                "{} WHERE variant_id IN ({}) ORDER BY id",
                ANNOTATION, placeholders
            ),
            params_from_iter(variants.iter()),
            annotation,
        )
    }

    fn annotations(&self, variant: VariantId) -> Result<Vec<VariantAnnotation>> {
        self.query(
            &format!("{} WHERE variant_id = ?1 ORDER BY id", ANNOTATION),
            params![variant],
            annotation,
        )
    }

    fn chromosomes_labelled(&self, label: &str) -> Result<Vec<Chromosome>> {
        self.query(
            &format!("{} WHERE chromosome = ?1 ORDER BY id", CHROMOSOME),
            params![label],
            chromosome,
        )
    }

    fn organisms_with_code(&self, code: &str) -> Result<Vec<OrganismAnnotation>> {
        self.query(
            &format!("{} WHERE organism_code = ?1 ORDER BY id", ORGANISM),
            params![code],
            organism,
        )
    }

    fn genes_on(&self, chromosome: ChromosomeId) -> Result<Vec<Gene>> {
        self.query(
            &format!("{} WHERE chromosome_id = ?1 ORDER BY id", GENE),
            params![chromosome],
            gene,
        )
    }

    fn genes_named(&self, name: &str) -> Result<Vec<Gene>> {
        self.query(
            &format!("{} WHERE gene_name = ?1 COLLATE NOCASE ORDER BY id", GENE),
            params![name],
            gene,
        )
    }
}
