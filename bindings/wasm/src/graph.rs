use serde::Serialize;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use eulertour_core::{
    DEMO_START, Graph, GraphFile, Message, Outcome, TourConfig, VertexId, classify, demo_graph,
};

use crate::common::*;

/// Edge geometry handed to the canvas renderer.
#[derive(Serialize)]
struct EdgeView {
    id: String,
    low: u32,
    high: u32,
    distance: f64,
    midpoint: [f64; 2],
}

/// One consecutive pair of the tour, in drawing order.
#[derive(Serialize)]
struct LegView {
    from: u32,
    to: u32,
}

#[derive(Serialize)]
struct TourView<'a> {
    outcome: &'a Outcome,
    labels: Option<String>,
    legs: Vec<LegView>,
    messages: Vec<Message>,
}

#[wasm_bindgen]
pub struct WasmGraph {
    inner: Graph,
    start: Option<VertexId>,
}

#[wasm_bindgen]
impl WasmGraph {
    /// Construct a graph from JSON text: either an array of
    /// `{ id, name, x, y, linked }` records or `{ start, nodes: [...] }`.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<WasmGraph, JsValue> {
        let file = GraphFile::from_json(json).map_err(js_err)?;
        let start = file.start;
        let inner = file.into_graph().map_err(js_err)?;
        Ok(WasmGraph { inner, start })
    }

    /// The bundled 13-vertex demo graph.
    pub fn demo() -> Result<WasmGraph, JsValue> {
        Ok(WasmGraph { inner: demo_graph().map_err(js_err)?, start: Some(DEMO_START) })
    }

    pub fn vertex_count(&self) -> usize { self.inner.vertex_count() }

    pub fn edge_count(&self) -> usize { self.inner.edge_count() }

    /// Deduplicated edges with their length and label position.
    pub fn edges(&self) -> Result<JsValue, JsValue> {
        let edges = self.inner.edges().iter().map(|e| EdgeView {
            id: e.key().to_string(),
            low: e.low().0,
            high: e.high().0,
            distance: e.distance(),
            midpoint: [e.midpoint().x(), e.midpoint().y()],
        }).collect::<Vec<_>>();
        to_js(&edges)
    }

    /// `{ trail, cycle }` for the authored degrees.
    pub fn classify(&self) -> Result<JsValue, JsValue> {
        to_js(&classify(self.inner.vertices()))
    }

    /// Compute a circuit. Returns `{ outcome, labels, legs, messages }`;
    /// `legs` is empty when the graph has no circuit.
    pub fn tour(&self, start: Option<u32>, seed: Option<u64>) -> Result<JsValue, JsValue> {
        let start = start.map(VertexId)
            .or(self.start)
            .or_else(|| self.inner.vertices().first().map(|v| v.id()))
            .ok_or_else(|| js_err("graph has no vertices"))?;

        let mut messages: Vec<Message> = Vec::new();
        let config = TourConfig::new(start).with_seed(seed);
        let outcome = eulertour_core::calculate(&self.inner, &config, &mut messages).map_err(js_err)?;

        let (labels, legs) = match outcome.tour() {
            Some(tour) => {
                messages.push(Message {
                    category: eulertour_core::Category::Algorithm,
                    text: format!("{} established.", tour.labels(&self.inner)),
                });
                let legs = tour.legs().map(|(a, b)| LegView { from: a.0, to: b.0 }).collect();
                (Some(tour.labels(&self.inner)), legs)
            }
            None => (None, Vec::new()),
        };

        to_js(&TourView { outcome: &outcome, labels, legs, messages })
    }
}
