//! Caller-facing session: selection, input, and playback in one place
//!
//! A [`Session`] owns the current structure kind, algorithm, raw input, the
//! canonical structure parsed from it, and the playback controller. Every
//! change that affects the trace rebuilds it from scratch and reloads the
//! controller; the newest build always wins.

use std::time::Instant;

use tracing::{debug, info, span, warn, Level};

use crate::core::{
    delete_node, format_value, insert_node, Element, PlaybackConfig, Result, Structure,
    StructureKind, Trace, TraceError, TraceParams,
};
use crate::playback::{PlaybackController, PlaybackEvent, PlaybackState};
use crate::plugins::AlgorithmRegistry;

/// Coordinates one visualization: adapter -> trace -> playback
pub struct Session {
    registry: AlgorithmRegistry,
    kind: StructureKind,
    algorithm: &'static str,
    raw_input: String,
    structure: Structure,
    params: TraceParams,
    controller: PlaybackController,
    view: Vec<Element>,
    events: Vec<PlaybackEvent>,
    generation: u64,
}

impl Session {
    /// Start on an empty array with the first array algorithm selected
    pub fn new(registry: AlgorithmRegistry, config: PlaybackConfig) -> Result<Self> {
        let kind = StructureKind::Array;
        let algorithm = default_algorithm(&registry, kind)?;
        let mut session = Self {
            registry,
            kind,
            algorithm,
            raw_input: String::new(),
            structure: Structure::empty(kind),
            params: TraceParams::new(),
            controller: PlaybackController::new(config),
            view: Vec::new(),
            events: Vec::new(),
            generation: 0,
        };
        session.rebuild()?;
        Ok(session)
    }

    /// Switch structure kind, selecting its first algorithm
    ///
    /// The current raw input is re-read for the new kind; if it does not
    /// parse, the session starts from an empty structure.
    pub fn set_structure_kind(&mut self, kind: StructureKind) -> Result<()> {
        if kind == self.kind {
            return Ok(());
        }
        let algorithm = default_algorithm(&self.registry, kind)?;
        info!(%kind, algorithm, "Structure kind changed");

        self.structure = match self.registry.adapt(kind, &self.raw_input) {
            Ok(structure) => structure,
            Err(error) if error.is_recoverable() => {
                debug!(%error, "Current input does not fit the new kind");
                self.raw_input.clear();
                Structure::empty(kind)
            }
            Err(error) => return Err(error),
        };
        self.kind = kind;
        self.algorithm = algorithm;
        self.rebuild()
    }

    /// Select an algorithm for the current kind; unknown names fail fast and
    /// leave the selection unchanged
    pub fn select_algorithm(&mut self, name: &str) -> Result<()> {
        let algorithm = self.registry.algorithm(self.kind, name)?.name();
        self.algorithm = algorithm;
        self.rebuild()
    }

    /// Parse new raw input and rebuild
    ///
    /// Malformed input is reported and the previous structure and input are
    /// kept as they were; no trace is rebuilt.
    pub fn load_input(&mut self, raw: &str) -> Result<()> {
        let load_span = span!(Level::DEBUG, "load_input", kind = %self.kind, input_len = raw.len());
        let _enter = load_span.enter();

        match self.registry.adapt(self.kind, raw) {
            Ok(structure) => {
                self.raw_input = raw.to_string();
                self.structure = structure;
                self.rebuild()
            }
            Err(error) => {
                warn!(%error, "Keeping previous structure");
                Err(error)
            }
        }
    }

    /// Set or clear the search target and rebuild
    pub fn set_target(&mut self, target: Option<f64>) -> Result<()> {
        self.params.target = target;
        self.rebuild()
    }

    /// Insert a value before `index` and rebuild
    pub fn insert_node(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_editable()?;
        let edited = match &self.structure {
            Structure::Array(values) => Structure::Array(insert_node(values, index, value)?),
            Structure::LinkedList(values) => {
                Structure::LinkedList(insert_node(values, index, value)?)
            }
            Structure::Tree(slots) => Structure::Tree(insert_node(slots, index, Some(value))?),
            Structure::Graph(_) => return Err(TraceError::UnsupportedEdit { kind: self.kind }),
        };
        debug!(index, value, "Inserted node");
        self.apply_edit(edited)
    }

    /// Remove the node at `index` and rebuild
    pub fn delete_node(&mut self, index: usize) -> Result<()> {
        self.check_editable()?;
        let edited = match &self.structure {
            Structure::Array(values) => Structure::Array(delete_node(values, index)?),
            Structure::LinkedList(values) => Structure::LinkedList(delete_node(values, index)?),
            Structure::Tree(slots) => Structure::Tree(delete_node(slots, index)?),
            Structure::Graph(_) => return Err(TraceError::UnsupportedEdit { kind: self.kind }),
        };
        debug!(index, "Deleted node");
        self.apply_edit(edited)
    }

    /// Record that the user picked a node; selection has no other effect
    pub fn node_selected(&self, index: usize) {
        match self.structure.value_at(index) {
            Some(value) => info!(index, value, "Node selected"),
            None => debug!(index, "Selected an empty slot"),
        }
    }

    pub fn play(&mut self, now: Instant) -> bool {
        let started = self.controller.play(now);
        self.sync_view();
        started
    }

    pub fn pause(&mut self) {
        self.controller.pause();
        self.sync_view();
    }

    pub fn toggle(&mut self, now: Instant) -> bool {
        let playing = self.controller.toggle(now);
        self.sync_view();
        playing
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        let moved = self.controller.tick(now);
        self.sync_view();
        moved
    }

    pub fn step_forward(&mut self, now: Instant) -> bool {
        let moved = self.controller.step_forward(now);
        self.sync_view();
        moved
    }

    pub fn step_back(&mut self, now: Instant) -> bool {
        let moved = self.controller.step_back(now);
        self.sync_view();
        moved
    }

    pub fn seek(&mut self, index: usize, now: Instant) -> bool {
        let moved = self.controller.seek(index, now);
        self.sync_view();
        moved
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.sync_view();
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<f64> {
        self.controller.set_speed(speed)
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn params(&self) -> &TraceParams {
        &self.params
    }

    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.controller.trace().map(|trace| trace.as_ref())
    }

    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// Number of traces built so far; the loaded trace is always the latest
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The data as it should be drawn right now
    ///
    /// Follows the current step's snapshot while a reordering algorithm
    /// plays and returns to the initial order on reset.
    ///
    /// Step indices address structure slots, and each element's `id` is its
    /// slot. For trees with absent nodes the view holds only the real nodes,
    /// so a position in the view is not a slot: look elements up by `id`.
    pub fn view_data(&self) -> &[Element] {
        &self.view
    }

    /// Drain playback notifications seen since the last call
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }

    fn check_editable(&self) -> Result<()> {
        if self.kind.is_flat() {
            Ok(())
        } else {
            warn!(kind = %self.kind, "Node edit rejected");
            Err(TraceError::UnsupportedEdit { kind: self.kind })
        }
    }

    fn apply_edit(&mut self, edited: Structure) -> Result<()> {
        self.raw_input = render_input(&edited);
        self.structure = edited;
        self.rebuild()
    }

    fn rebuild(&mut self) -> Result<()> {
        self.generation += 1;
        let rebuild_span = span!(
            Level::DEBUG,
            "rebuild",
            generation = self.generation,
            algorithm = self.algorithm
        );
        let _enter = rebuild_span.enter();

        self.view = structure_elements(&self.structure);
        match self
            .registry
            .trace_structure(self.algorithm, &self.structure, &self.params)
        {
            Ok(trace) => {
                self.controller.load(trace);
                self.sync_view();
                Ok(())
            }
            Err(error) => {
                warn!(%error, "Trace build failed");
                self.controller.unload();
                self.sync_view();
                Err(error)
            }
        }
    }

    fn sync_view(&mut self) {
        for event in self.controller.take_events() {
            match &event {
                PlaybackEvent::StepChanged { .. } => {
                    if let Some(snapshot) = self.controller.data_snapshot() {
                        self.view = snapshot.to_vec();
                    }
                }
                PlaybackEvent::Reset {
                    restore: Some(elements),
                } => self.view = elements.clone(),
                _ => {}
            }
            self.events.push(event);
        }
    }
}

fn default_algorithm(registry: &AlgorithmRegistry, kind: StructureKind) -> Result<&'static str> {
    registry
        .algorithms_for(kind)
        .first()
        .copied()
        .ok_or_else(|| TraceError::UnknownStructure {
            name: kind.to_string(),
        })
}

/// Elements of a structure in slot order; absent tree slots are skipped but
/// keep their index as id
fn structure_elements(structure: &Structure) -> Vec<Element> {
    match structure {
        Structure::Array(values) | Structure::LinkedList(values) => Element::from_values(values),
        Structure::Tree(slots) => slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.map(|value| Element { id, value }))
            .collect(),
        Structure::Graph(nodes) => nodes
            .iter()
            .enumerate()
            .map(|(id, node)| Element {
                id,
                value: node.value,
            })
            .collect(),
    }
}

/// Text an edited structure reads back from
fn render_input(structure: &Structure) -> String {
    match structure {
        Structure::Array(values) | Structure::LinkedList(values) => values
            .iter()
            .map(|v| format_value(*v))
            .collect::<Vec<_>>()
            .join(", "),
        Structure::Tree(slots) => slots
            .iter()
            .map(|slot| slot.map_or_else(|| "null".to_string(), format_value))
            .collect::<Vec<_>>()
            .join(", "),
        Structure::Graph(nodes) => serde_json::to_string(nodes).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(AlgorithmRegistry::with_all_plugins(), PlaybackConfig::default()).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = session();
        assert_eq!(session.kind(), StructureKind::Array);
        assert_eq!(session.algorithm(), "bubble-sort");
        assert_eq!(session.state(), PlaybackState::Idle);
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_load_input_builds_trace() {
        let mut session = session();
        session.load_input("5, 2, 8, 1").unwrap();
        assert_eq!(session.state(), PlaybackState::Ready);
        assert_eq!(session.trace().unwrap().len(), 18);
    }

    #[test]
    fn test_malformed_graph_keeps_previous_structure() {
        let mut session = session();
        session.set_structure_kind(StructureKind::Graph).unwrap();
        session
            .load_input(r#"{"nodes": [1, 2], "edges": [[0, 1]]}"#)
            .unwrap();
        let before = session.structure().clone();
        let generation = session.generation();

        let err = session.load_input(r#"{"nodes": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, TraceError::MalformedInput { .. }));
        assert_eq!(session.structure(), &before);
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn test_unknown_algorithm_keeps_selection() {
        let mut session = session();
        assert!(session.select_algorithm("dfs").is_err());
        assert_eq!(session.algorithm(), "bubble-sort");
    }

    #[test]
    fn test_kind_switch_reuses_compatible_input() {
        let mut session = session();
        session.load_input("1 2 3").unwrap();
        session.set_structure_kind(StructureKind::Tree).unwrap();
        assert_eq!(session.algorithm(), "inorder");
        assert_eq!(session.trace().unwrap().len(), 3);

        session.set_structure_kind(StructureKind::Graph).unwrap();
        assert!(session.structure().is_empty());
        assert_eq!(session.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_view_follows_snapshots_and_resets() {
        let start = Instant::now();
        let mut session = session();
        session.load_input("2 1").unwrap();
        let initial: Vec<f64> = session.view_data().iter().map(|e| e.value).collect();
        assert_eq!(initial, vec![2.0, 1.0]);

        while session.step_forward(start) {}
        let sorted: Vec<f64> = session.view_data().iter().map(|e| e.value).collect();
        assert_eq!(sorted, vec![1.0, 2.0]);

        session.reset();
        let restored: Vec<usize> = session.view_data().iter().map(|e| e.id).collect();
        assert_eq!(restored, vec![0, 1]);
    }

    #[test]
    fn test_node_editing() {
        let mut session = session();
        session.load_input("1, 3").unwrap();
        session.insert_node(1, 2.0).unwrap();
        assert_eq!(session.raw_input(), "1, 2, 3");
        session.delete_node(0).unwrap();
        assert_eq!(session.structure(), &Structure::Array(vec![2.0, 3.0]));
        assert!(matches!(
            session.delete_node(9),
            Err(TraceError::IndexOutOfRange { index: 9, len: 2 })
        ));
    }

    #[test]
    fn test_graph_rejects_editing() {
        let mut session = session();
        session.set_structure_kind(StructureKind::Graph).unwrap();
        session
            .load_input(r#"{"nodes": [1, 2], "edges": [[0, 1]]}"#)
            .unwrap();
        let generation = session.generation();
        assert!(matches!(
            session.insert_node(0, 1.0),
            Err(TraceError::UnsupportedEdit {
                kind: StructureKind::Graph
            })
        ));
        assert!(matches!(
            session.delete_node(0),
            Err(TraceError::UnsupportedEdit { .. })
        ));
        assert_eq!(session.generation(), generation);
        assert_eq!(session.structure().len(), 2);
    }

    #[test]
    fn test_tree_view_is_keyed_by_slot() {
        let mut session = session();
        session.set_structure_kind(StructureKind::Tree).unwrap();
        session.load_input("1, null, 3, null, null, 6").unwrap();

        let ids: Vec<usize> = session.view_data().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 2, 5]);

        // Inorder visits slot 0 first; its element is found by id, not position
        let first = session.trace().unwrap().get(0).unwrap().active_nodes()[0];
        assert_eq!(first, 0);
        let second = session.trace().unwrap().get(1).unwrap().active_nodes()[0];
        let element = session.view_data().iter().find(|e| e.id == second).unwrap();
        assert_eq!(second, 5);
        assert_eq!(element.value, 6.0);
    }

    #[test]
    fn test_binary_search_needs_target() {
        let mut session = session();
        session.load_input("1 3 5 7 9").unwrap();
        let err = session.select_algorithm("binary-search").unwrap_err();
        assert!(matches!(err, TraceError::MissingTarget { .. }));
        assert_eq!(session.state(), PlaybackState::Idle);

        session.set_target(Some(4.0)).unwrap();
        let trace = session.trace().unwrap();
        assert_eq!(trace.len(), 4);
        assert_eq!(
            trace.last().unwrap().description(),
            "Target 4 not found in the array"
        );
    }

    #[test]
    fn test_rebuild_resets_playback() {
        let start = Instant::now();
        let mut session = session();
        session.load_input("3 2 1").unwrap();
        session.play(start);
        session.tick(start + std::time::Duration::from_secs(1));
        assert_eq!(session.controller().current_index(), 1);

        session.select_algorithm("quick-sort").unwrap();
        assert_eq!(session.state(), PlaybackState::Ready);
        assert_eq!(session.controller().current_index(), 0);
        assert!(session.controller().next_deadline().is_none());
    }
}
