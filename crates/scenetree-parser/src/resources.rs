//! The external scene resource table.
//!
//! Scene files declare the scenes they instance up front:
//!
//! ```text
//! [ext_resource type="PackedScene" uid="uid://b3" path="res://enemy.tscn" id="3_x"]
//! ```
//!
//! [`build_resource_index`] collects these declarations into a
//! [`ResourceIndex`] from resource id to scene path. Declarations without an
//! `id` or a `path` are not scene references and are skipped; ids declared
//! more than once are rejected.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::{
    error::{DuplicatedResource, ParseError, Result},
    lines::{self, Line},
    params::{self, ParamValue},
    span::Span,
};

/// Line marker of an external scene declaration.
const SCENE_RESOURCE_MARKER: &str = "[ext_resource type=\"PackedScene\"";
/// Header of every external resource declaration.
const RESOURCE_HEADER: &str = "[ext_resource";

/// The declared path of an external scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneResource {
    path: String,
    span: Span,
}

impl SceneResource {
    /// The scene path, e.g. `res://enemy.tscn`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The span of the declaring line.
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Lookup from resource id to the external scene it declares.
///
/// Ids are unique; iteration follows declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceIndex {
    scenes: IndexMap<String, SceneResource>,
}

impl ResourceIndex {
    /// Get the scene declared under `id`.
    pub fn get(&self, id: &str) -> Option<&SceneResource> {
        self.scenes.get(id)
    }

    /// Get the scene path declared under `id`.
    pub fn path(&self, id: &str) -> Option<&str> {
        self.get(id).map(SceneResource::path)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Iterate over `(id, scene)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SceneResource)> {
        self.scenes.iter().map(|(id, scene)| (id.as_str(), scene))
    }
}

/// One `(id, path)` declaration. Lives only while the table is built.
struct ResourceRecord<'src> {
    id: &'src str,
    path: &'src str,
    span: Span,
}

/// Build the resource table from the scene source.
///
/// # Errors
///
/// - [`ParseError::UnexpectedResourceFormat`] if a selected line is not of
///   the form `[ext_resource <parameters>]`. Selected lines already start
///   with `[ext_resource ` and end with `]`, so this is not raised for any
///   current input.
/// - [`ParseError::DuplicatedSceneResources`] if an id is declared more than
///   once, carrying every conflicting path.
pub fn build_resource_index(source: &str) -> Result<ResourceIndex> {
    let lines = lines::declarations(source, SCENE_RESOURCE_MARKER);
    debug!(count = lines.len(); "Selected scene resource lines");

    let mut records = Vec::with_capacity(lines.len());
    for line in lines {
        let params = resource_params(line)?;
        match resource_record(&params, line.span()) {
            Some(record) => records.push(record),
            None => debug!(line = line.text(); "Skipping scene resource without id or path"),
        }
    }

    into_index(records)
}

fn resource_params<'src>(line: Line<'src>) -> Result<IndexMap<&'src str, ParamValue<'src>>> {
    trace!(line = line.text(); "Parsing scene resource");

    let segment = params::segment(line.text(), RESOURCE_HEADER).ok_or_else(|| {
        ParseError::UnexpectedResourceFormat {
            line: line.text().to_string(),
            span: line.span(),
        }
    })?;

    Ok(params::resource_params(segment)
        .into_iter()
        .map(|param| (param.key(), param.value()))
        .collect())
}

fn resource_record<'src>(
    params: &IndexMap<&'src str, ParamValue<'src>>,
    span: Span,
) -> Option<ResourceRecord<'src>> {
    let id = params.get("id")?.text();
    let path = params.get("path")?.text();
    Some(ResourceRecord { id, path, span })
}

fn into_index(records: Vec<ResourceRecord<'_>>) -> Result<ResourceIndex> {
    let mut by_id: IndexMap<&str, Vec<(String, Span)>> = IndexMap::new();
    for record in &records {
        by_id
            .entry(record.id)
            .or_default()
            .push((record.path.to_string(), record.span));
    }

    let duplicates: Vec<_> = by_id
        .iter()
        .filter(|(_, declarations)| declarations.len() > 1)
        .map(|(id, declarations)| DuplicatedResource::new(*id, declarations.clone()))
        .collect();

    if !duplicates.is_empty() {
        return Err(ParseError::DuplicatedSceneResources { duplicates });
    }

    let scenes = records
        .into_iter()
        .map(|record| {
            (
                record.id.to_string(),
                SceneResource {
                    path: record.path.to_string(),
                    span: record.span,
                },
            )
        })
        .collect();

    Ok(ResourceIndex { scenes })
}
