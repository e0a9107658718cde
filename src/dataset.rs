// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Dataset Assembly** - *From parameter runs to one output document*
//!
//! For each run of a family the assembler seeds a fresh [`Sampler`], asks the
//! family for its points, drops repeats and builds one record per remaining point.
//! Grouped families wrap each run's records with the family label and parameters;
//! flat families concatenate their records.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::ReferenceError;
use crate::families::{FunctionFamily, Layout};
use crate::oracle::HighPrecisionOracle;
use crate::record::Record;
use crate::sampling::sampler::Sampler;
use crate::utils::dedup_points;

/// Fixed parameters of one run, as they appear in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterSet {
    Binomial {
        #[serde(rename = "N")]
        n: u64,
        p: f64,
        q: f64,
    },
    Normal {
        mu: f64,
        sigma: f64,
    },
    /// Special-function families have no run parameters.
    None,
}

impl From<()> for ParameterSet {
    fn from(_: ()) -> Self {
        ParameterSet::None
    }
}

/// One run of a grouped family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub distribution: String,
    #[serde(flatten)]
    pub parameters: ParameterSet,
    pub values: Vec<Record>,
}

/// The complete document emitted for one family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Datasets(Vec<Dataset>),
    Records(Vec<Record>),
}

impl Output {
    /// Every record of the document, dataset by dataset.
    pub fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        match self {
            Output::Datasets(sets) => Box::new(sets.iter().flat_map(|d| d.values.iter())),
            Output::Records(records) => Box::new(records.iter()),
        }
    }

    /// Total record count.
    pub fn len(&self) -> usize {
        self.records().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluates every run of `family` against `oracle`.
///
/// Runs are processed in order, each from its own seed, so the document depends
/// only on the family and the oracle precision.
pub fn assemble<F: FunctionFamily>(
    family: &F,
    oracle: &dyn HighPrecisionOracle,
) -> Result<Output, ReferenceError> {
    let runs = family.runs();
    info!(
        family = F::NAME,
        runs = runs.len(),
        precision = oracle.precision(),
        "Generating reference data"
    );

    let mut datasets = Vec::new();
    let mut flat = Vec::new();

    for run in &runs {
        let mut rng = Sampler::new(run.seed);
        let points = dedup_points(family.select(&run.params, &mut rng)?);
        info!(
            family = F::NAME,
            params = ?run.params,
            seed = rng.seed(),
            points = points.len(),
            "Selected points"
        );

        let values: Vec<Record> = points
            .iter()
            .map(|point| {
                debug!(family = F::NAME, point = ?point, "Evaluating");
                family.build(oracle, &run.params, point)
            })
            .collect();

        match F::LAYOUT {
            Layout::Grouped => datasets.push(Dataset {
                distribution: F::LABEL.to_owned(),
                parameters: run.params.into(),
                values,
            }),
            Layout::Flat => flat.extend(values),
        }
    }

    let output = match F::LAYOUT {
        Layout::Grouped => Output::Datasets(datasets),
        Layout::Flat => Output::Records(flat),
    };
    info!(family = F::NAME, records = output.len(), "Assembled");
    Ok(output)
}

/// Writes `output` as one JSON document followed by a newline.
pub fn write_output<W: Write>(
    output: &Output,
    mut writer: W,
    pretty: bool,
) -> Result<(), ReferenceError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, output)?;
    } else {
        serde_json::to_writer(&mut writer, output)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
