use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{Catalog, DataError, Name};

/// How to treat a prerequisite name that is absent from the catalog.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PrerequisitePolicy {
    /// Treat as data corruption and abort.
    #[default]
    Strict,
    /// Drop the reference from the edge set.
    IgnoreMissing,
}

/// Directed graph over exercise names, with edges from each prerequisite to
/// its dependents. Derived from the catalog, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisiteGraph {
    dependents: BTreeMap<Name, Vec<Name>>,
    layers: Vec<Vec<Name>>,
    layer_index: HashMap<Name, usize>,
}

impl PrerequisiteGraph {
    pub fn build(catalog: &Catalog, policy: PrerequisitePolicy) -> Result<Self, DataError> {
        let mut dependents: BTreeMap<Name, Vec<Name>> = BTreeMap::new();
        let mut pending: HashMap<Name, usize> =
            catalog.exercises().map(|e| (e.name.clone(), 0)).collect();

        for exercise in catalog.exercises() {
            for prerequisite in &exercise.prerequisites {
                if catalog.contains(prerequisite) {
                    dependents
                        .entry(prerequisite.clone())
                        .or_default()
                        .push(exercise.name.clone());
                    if let Some(count) = pending.get_mut(&exercise.name) {
                        *count += 1;
                    }
                } else if policy == PrerequisitePolicy::Strict {
                    return Err(DataError::DanglingPrerequisite {
                        exercise: exercise.name.clone(),
                        prerequisite: prerequisite.clone(),
                    });
                }
            }
        }

        let layers = layers(catalog, &dependents, pending)?;
        let layer_index = layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| layer.iter().map(move |name| (name.clone(), i)))
            .collect();

        Ok(Self {
            dependents,
            layers,
            layer_index,
        })
    }

    /// Topological layers: every exercise in layer *k* has all its
    /// prerequisites in layers < *k*. Ties within a layer are broken by
    /// catalog insertion order.
    #[must_use]
    pub fn layers(&self) -> &[Vec<Name>] {
        &self.layers
    }

    #[must_use]
    pub fn layer_of(&self, name: &Name) -> Option<usize> {
        self.layer_index.get(name).copied()
    }

    #[must_use]
    pub fn dependents_of(&self, name: &Name) -> &[Name] {
        self.dependents.get(name).map_or(&[], Vec::as_slice)
    }
}

fn layers(
    catalog: &Catalog,
    dependents: &BTreeMap<Name, Vec<Name>>,
    mut pending: HashMap<Name, usize>,
) -> Result<Vec<Vec<Name>>, DataError> {
    let mut layers = Vec::new();

    while !pending.is_empty() {
        let layer: Vec<Name> = catalog
            .exercises()
            .filter(|e| pending.get(&e.name) == Some(&0))
            .map(|e| e.name.clone())
            .collect();

        if layer.is_empty() {
            // Every leftover exercise waits on another leftover.
            let Some(name) = cycle_member(catalog, &pending) else {
                break;
            };
            return Err(DataError::CyclicDependency { name });
        }

        for name in &layer {
            pending.remove(name);
            if let Some(names) = dependents.get(name) {
                for dependent in names {
                    if let Some(count) = pending.get_mut(dependent) {
                        *count -= 1;
                    }
                }
            }
        }

        layers.push(layer);
    }

    Ok(layers)
}

/// Every exercise left over after layering has at least one unresolved
/// prerequisite among the leftovers, so walking prerequisites must revisit
/// an exercise, and that exercise lies on a cycle.
fn cycle_member(catalog: &Catalog, pending: &HashMap<Name, usize>) -> Option<Name> {
    let mut seen = HashSet::new();
    let mut current = catalog
        .exercises()
        .map(|e| e.name.clone())
        .find(|name| pending.contains_key(name));

    while let Some(name) = current {
        if !seen.insert(name.clone()) {
            return Some(name);
        }
        current = catalog.get(&name).and_then(|e| {
            e.prerequisites
                .iter()
                .find(|p| pending.contains_key(*p))
                .cloned()
        });
    }

    None
}
