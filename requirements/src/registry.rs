//! Compiles catalog definitions into an index-based graph with a tier cache.
//!
//! Every definition records which ledger categories, mode fields and other
//! definitions it reads. The reverse of those edges is the dependency table
//! used to invalidate exactly the transitive dependents of a changed input.

use {
    crate::{
        catalog::{Definition, DefinitionKind},
        requirement::{Input, Requirement},
    },
    bevy::{
        log::{debug, trace, warn},
        platform::collections::HashMap,
    },
    std::collections::VecDeque,
    tracker_components::Accessibility,
    tracker_resources::{ItemLedger, ModeConfiguration, TrackerError},
};

struct Entry {
    id: &'static str,
    kind: DefinitionKind,
    requirement: Requirement<usize>,
    /// Index into `CompiledCatalog::components`.
    component: usize,
}

/// A strongly connected component of the reference graph.
struct Component {
    members: Vec<usize>,
    /// More than one member, or a member referencing itself.
    cyclic: bool,
}

struct CompiledCatalog {
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
    components: Vec<Component>,
    /// Entries reading each leaf input directly.
    input_dependents: HashMap<Input, Vec<usize>>,
    /// Entries referencing each entry directly.
    ref_dependents: Vec<Vec<usize>>,
}

/// Maps identifiers to compiled requirements and memoizes their tiers.
#[derive(Default)]
pub struct RequirementRegistry {
    compiled: Option<CompiledCatalog>,
    cache: Vec<Option<Accessibility>>,
}

impl RequirementRegistry {
    pub fn is_initialized(&self) -> bool {
        self.compiled.is_some()
    }

    /// Builds the registry from `definitions`. Does nothing when already built.
    pub fn initialize(&mut self, definitions: Vec<Definition>) -> Result<(), TrackerError> {
        if self.is_initialized() {
            debug!("requirement registry already initialized");
            return Ok(());
        }

        let compiled = compile(definitions)?;
        self.cache = vec![None; compiled.entries.len()];
        self.compiled = Some(compiled);
        Ok(())
    }

    /// Tier of `id` for the given state, served from the cache when possible.
    pub fn accessibility(
        &mut self,
        id: &str,
        items: &ItemLedger,
        mode: &ModeConfiguration,
    ) -> Result<Accessibility, TrackerError> {
        let catalog = self
            .compiled
            .as_ref()
            .ok_or(TrackerError::UninitializedRegistry)?;
        let &index = catalog
            .index
            .get(id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))?;

        Ok(resolve(catalog, &mut self.cache, index, items, mode))
    }

    /// Drops the cached tier of every entry depending on `input`, directly or
    /// through other entries, and returns their identifiers.
    pub fn invalidate(&mut self, input: Input) -> Vec<&'static str> {
        let Some(catalog) = &self.compiled else {
            return Vec::new();
        };
        let Some(direct) = catalog.input_dependents.get(&input) else {
            return Vec::new();
        };

        let mut visited = vec![false; catalog.entries.len()];
        let mut queue: VecDeque<usize> = direct.iter().copied().collect();
        let mut invalidated = Vec::new();

        while let Some(index) = queue.pop_front() {
            if visited[index] {
                continue;
            }
            visited[index] = true;
            self.cache[index] = None;
            invalidated.push(catalog.entries[index].id);
            queue.extend(catalog.ref_dependents[index].iter().copied());
        }

        trace!(?input, count = invalidated.len(), "invalidated cached tiers");
        invalidated
    }

    /// Drops every cached tier.
    pub fn clear_cache(&mut self) {
        self.cache.iter_mut().for_each(|tier| *tier = None);
    }

    /// Cached tier of `id`, if it has been computed since the last invalidation.
    pub fn cached(&self, id: &str) -> Option<Accessibility> {
        let catalog = self.compiled.as_ref()?;
        let &index = catalog.index.get(id)?;
        self.cache[index]
    }

    pub fn kind(&self, id: &str) -> Result<DefinitionKind, TrackerError> {
        let catalog = self
            .compiled
            .as_ref()
            .ok_or(TrackerError::UninitializedRegistry)?;
        catalog
            .index
            .get(id)
            .map(|&index| catalog.entries[index].kind)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))
    }

    /// Identifiers in catalog order. Empty before initialization.
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.compiled
            .iter()
            .flat_map(|catalog| catalog.entries.iter().map(|entry| entry.id))
    }

    pub fn len(&self) -> usize {
        self.compiled
            .as_ref()
            .map(|catalog| catalog.entries.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compile(definitions: Vec<Definition>) -> Result<CompiledCatalog, TrackerError> {
    let mut index = HashMap::new();
    for (i, definition) in definitions.iter().enumerate() {
        if index.insert(definition.id, i).is_some() {
            return Err(TrackerError::DuplicateIdentifier(definition.id.to_string()));
        }
    }

    let mut compiled = Vec::with_capacity(definitions.len());
    let mut edges = Vec::with_capacity(definitions.len());
    let mut input_dependents: HashMap<Input, Vec<usize>> = HashMap::new();

    for (i, definition) in definitions.iter().enumerate() {
        let requirement = definition.requirement.try_map_refs(&mut |reference: &&'static str| {
            index
                .get(reference)
                .copied()
                .ok_or_else(|| TrackerError::UnknownReference {
                    id: definition.id.to_string(),
                    reference: reference.to_string(),
                })
        })?;

        let mut inputs = Vec::new();
        let mut refs = Vec::new();
        requirement.collect_dependencies(&mut inputs, &mut refs);

        for input in inputs {
            let dependents = input_dependents.entry(input).or_default();
            if dependents.last() != Some(&i) {
                dependents.push(i);
            }
        }

        let mut refs: Vec<usize> = refs.into_iter().copied().collect();
        refs.sort_unstable();
        refs.dedup();
        edges.push(refs);
        compiled.push(requirement);
    }

    let mut ref_dependents = vec![Vec::new(); definitions.len()];
    for (i, refs) in edges.iter().enumerate() {
        for &target in refs {
            ref_dependents[target].push(i);
        }
    }

    let components: Vec<Component> = strongly_connected_components(&edges)
        .into_iter()
        .map(|members| {
            let cyclic = members.len() > 1 || edges[members[0]].contains(&members[0]);
            Component { members, cyclic }
        })
        .collect();

    let mut component_of = vec![0; definitions.len()];
    for (c, component) in components.iter().enumerate() {
        for &member in &component.members {
            component_of[member] = c;
        }
        if component.cyclic {
            let ids: Vec<_> = component
                .members
                .iter()
                .map(|&m| definitions[m].id)
                .collect();
            debug!(?ids, "cyclic requirement component");
        }
    }

    let entries = definitions
        .iter()
        .zip(compiled)
        .enumerate()
        .map(|(i, (definition, requirement))| Entry {
            id: definition.id,
            kind: definition.kind,
            requirement,
            component: component_of[i],
        })
        .collect();

    Ok(CompiledCatalog {
        entries,
        index,
        components,
        input_dependents,
        ref_dependents,
    })
}

fn resolve(
    catalog: &CompiledCatalog,
    cache: &mut [Option<Accessibility>],
    index: usize,
    items: &ItemLedger,
    mode: &ModeConfiguration,
) -> Accessibility {
    if let Some(tier) = cache[index] {
        return tier;
    }

    let entry = &catalog.entries[index];
    let component = &catalog.components[entry.component];
    if component.cyclic {
        solve_component(catalog, cache, component, items, mode);
        return cache[index].unwrap_or_default();
    }

    let tier = entry.requirement.evaluate(items, mode, &mut |dependency: &usize| {
        resolve(catalog, cache, *dependency, items, mode)
    });
    cache[index] = Some(tier);
    tier
}

/// Least fixed point of a cyclic component.
///
/// Members start unreachable and are re-evaluated until no tier moves. Tiers
/// only rise while the component is monotone, so this terminates within
/// `members * tiers` rounds.
fn solve_component(
    catalog: &CompiledCatalog,
    cache: &mut [Option<Accessibility>],
    component: &Component,
    items: &ItemLedger,
    mode: &ModeConfiguration,
) {
    for &member in &component.members {
        cache[member] = Some(Accessibility::None);
    }

    let max_rounds = component.members.len() * Accessibility::ALL.len() + 1;
    for round in 1..=max_rounds {
        let mut changed = false;
        for &member in &component.members {
            let tier = catalog.entries[member].requirement.evaluate(
                items,
                mode,
                &mut |dependency: &usize| resolve(catalog, cache, *dependency, items, mode),
            );
            if cache[member] != Some(tier) {
                cache[member] = Some(tier);
                changed = true;
            }
        }
        if !changed {
            trace!(round, "cyclic component converged");
            return;
        }
    }

    let ids: Vec<_> = component
        .members
        .iter()
        .map(|&m| catalog.entries[m].id)
        .collect();
    warn!(?ids, "cyclic component did not converge, keeping last round");
}

/// Tarjan's algorithm over `edges[i]` = entries referenced by entry `i`.
///
/// Components come out in reverse topological order: every component is
/// emitted after the components it references.
fn strongly_connected_components(edges: &[Vec<usize>]) -> Vec<Vec<usize>> {
    struct Tarjan<'a> {
        edges: &'a [Vec<usize>],
        order: Vec<Option<usize>>,
        lowlink: Vec<usize>,
        on_stack: Vec<bool>,
        stack: Vec<usize>,
        next: usize,
        components: Vec<Vec<usize>>,
    }

    impl Tarjan<'_> {
        fn visit(&mut self, v: usize) {
            self.order[v] = Some(self.next);
            self.lowlink[v] = self.next;
            self.next += 1;
            self.stack.push(v);
            self.on_stack[v] = true;

            for i in 0..self.edges[v].len() {
                let w = self.edges[v][i];
                match self.order[w] {
                    None => {
                        self.visit(w);
                        self.lowlink[v] = self.lowlink[v].min(self.lowlink[w]);
                    }
                    Some(order) if self.on_stack[w] => {
                        self.lowlink[v] = self.lowlink[v].min(order);
                    }
                    Some(_) => {}
                }
            }

            if self.order[v] == Some(self.lowlink[v]) {
                let mut component = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w] = false;
                    component.push(w);
                    if w == v {
                        break;
                    }
                }
                self.components.push(component);
            }
        }
    }

    let n = edges.len();
    let mut tarjan = Tarjan {
        edges,
        order: vec![None; n],
        lowlink: vec![0; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        next: 0,
        components: Vec::new(),
    };

    for v in 0..n {
        if tarjan.order[v].is_none() {
            tarjan.visit(v);
        }
    }

    tarjan.components
}
