//! Log events emitted with the `tracing` feature enabled.
#![cfg(feature = "tracing")]

use flexgraph::Graph;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Field name to `Debug`-formatted value, including `message`.
type Fields = BTreeMap<&'static str, String>;

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<AtomicUsize>,
    records: Arc<Mutex<Vec<Fields>>>,
}

impl Recorder {
    fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter_map(|fields| fields.get("message").cloned())
            .collect()
    }

    fn with_message(&self, message: &str) -> Vec<Fields> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|fields| fields.get("message").map(String::as_str) == Some(message))
            .cloned()
            .collect()
    }
}

struct FieldVisitor<'a>(&'a mut Fields);

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name(), format!("{value:?}"));
    }
}

impl<S: tracing::Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.events.fetch_add(1, Ordering::SeqCst);
        let mut fields = Fields::new();
        event.record(&mut FieldVisitor(&mut fields));
        if let Ok(mut records) = self.records.lock() {
            records.push(fields);
        }
    }
}

#[test]
fn test_mutations_and_searches_emit_events() {
    let recorder = Recorder::default();
    let _guard = tracing_subscriber::registry()
        .with(recorder.clone().with_filter(tracing_subscriber::filter::LevelFilter::TRACE))
        .set_default();

    let mut graph: Graph<&str, ()> = Graph::directed();
    graph.add_vertex("a", ()).unwrap();
    graph.add_vertex("b", ()).unwrap();
    graph.add_edge(&"a", &"b").unwrap();
    assert!(graph.quickest_path(&"a", &"b").unwrap().is_some());
    graph.remove_edge(&"a", &"b").unwrap();
    graph.remove_vertex(&"b");

    let messages = recorder.messages();
    assert!(recorder.events.load(Ordering::SeqCst) >= messages.len());
    for expected in ["vertex added", "edge added", "target reached", "nullified edge collected", "vertex removed"] {
        assert!(
            messages.iter().any(|m| m.as_str() == expected),
            "missing event {expected:?} in {messages:?}"
        );
    }
}

#[test]
fn test_failed_mutation_logs_nothing() {
    let recorder = Recorder::default();
    let _guard = tracing_subscriber::registry().with(recorder.clone()).set_default();

    let mut graph: Graph<u8, ()> = Graph::undirected();
    assert!(graph.add_edge(&1, &2).is_err());
    assert!(graph.remove_edge(&1, &2).is_err());
    assert_eq!(recorder.events.load(Ordering::SeqCst), 0);
}

#[test]
fn test_breadth_first_repops_shared_vertex() {
    let recorder = Recorder::default();
    let _guard = tracing_subscriber::registry()
        .with(recorder.clone().with_filter(tracing_subscriber::filter::LevelFilter::TRACE))
        .set_default();

    // Both branches enqueue `x` before either copy is dequeued. `x` points
    // back at every vertex settled by then, so each expansion may only add `t`.
    let mut graph: Graph<&str, ()> = Graph::directed();
    for id in ["a", "b", "c", "x", "t"] {
        graph.add_vertex(id, ()).unwrap();
    }
    graph.add_edge(&"a", &"b").unwrap();
    graph.add_edge(&"a", &"c").unwrap();
    graph.add_edge(&"b", &"x").unwrap();
    graph.add_edge(&"c", &"x").unwrap();
    graph.add_edge(&"x", &"t").unwrap();
    graph.add_edge(&"x", &"a").unwrap();
    graph.set_edge(&"x", &"b", Some(1)).unwrap();
    graph.set_edge(&"x", &"c", Some(1)).unwrap();

    let path = graph.shortest_path(&"a", &"t").unwrap().unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path[2], "x");

    let expansions = recorder.with_message("frame expanded");
    let of_x: Vec<_> = expansions
        .iter()
        .filter(|fields| fields.get("id").map(String::as_str) == Some("\"x\""))
        .collect();
    assert_eq!(of_x.len(), 2, "{expansions:?}");
    // [x, t] after the first expansion, [t, t] after the second.
    for fields in of_x {
        assert_eq!(fields.get("frontier").map(String::as_str), Some("2"));
    }
}
