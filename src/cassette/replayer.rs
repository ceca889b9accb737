//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
pub struct CassetteReplayer {
    queues: HashMap<PortMethodKey, Vec<Interaction>>,
    cursors: HashMap<PortMethodKey, usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push(interaction.clone());
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Number of interactions not served yet, across all ports.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.iter().map(|(key, queue)| queue.len() - self.cursors.get(key).copied().unwrap_or(0)).sum()
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// port/method combination, listing what was requested and what remains.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> &Interaction {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        let Some(queue) = self.queues.get(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };

        let cursor = self.cursors.entry(key).or_insert(0);
        assert!(
            *cursor < queue.len(),
            "Cassette exhausted: all {count} interactions for port={port:?} method={method:?} \
             have been consumed. Last interaction was seq={last_seq}.",
            count = queue.len(),
            last_seq = queue.last().map_or(0, |i| i.seq),
        );

        let interaction = &queue[*cursor];
        *cursor += 1;
        interaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!({}), output }
    }

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette { name: "test".into(), recorded_at: Utc::now(), run_id: "r".into(), interactions }
    }

    #[test]
    fn serves_each_port_method_in_order() {
        let cassette = make_cassette(vec![
            interaction(0, "forge", "status", json!({"ok": 1})),
            interaction(1, "vcs", "clone_default", json!({"ok": null})),
            interaction(2, "forge", "status", json!({"ok": 2})),
        ]);

        let mut replayer = CassetteReplayer::new(&cassette);
        assert_eq!(replayer.remaining(), 3);

        assert_eq!(replayer.next_interaction("forge", "status").seq, 0);
        assert_eq!(replayer.next_interaction("vcs", "clone_default").seq, 1);
        let third = replayer.next_interaction("forge", "status");
        assert_eq!(third.output, json!({"ok": 2}));
        assert_eq!(replayer.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_replayer_panics_with_descriptive_message() {
        let cassette = make_cassette(vec![interaction(0, "forge", "status", json!({}))]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("forge", "status");
        let _ = replayer.next_interaction("forge", "status");
    }

    #[test]
    #[should_panic(expected = "no interactions recorded")]
    fn unknown_port_panics() {
        let mut replayer = CassetteReplayer::new(&make_cassette(vec![]));
        let _ = replayer.next_interaction("unknown", "method");
    }
}
