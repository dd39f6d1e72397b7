use serde::Serialize;

/// Structured session event emitted from Rust and consumed by the JS page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Event {
    SessionStart {
        home_lat: f64,
        home_lng: f64,
        neighborhood_size: u32,
        spawn_probability: f64,
    },
    CacheSpawned {
        i: i32,
        j: i32,
        coins: u32,
    },
    CoinCollected {
        i: i32,
        j: i32,
        cache_coins: u32,
        points: u32,
    },
    CoinDeposited {
        i: i32,
        j: i32,
        cache_coins: u32,
        points: u32,
    },
    TransferRejected {
        i: i32,
        j: i32,
        action: &'static str,
        reason: &'static str,
    },
    SessionReset {
        cache_count: u32,
    },
}

impl Event {
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Event;

    #[test]
    fn events_are_tagged_by_kind() {
        let line = Event::CoinCollected {
            i: -1,
            j: 2,
            cache_coins: 4,
            points: 1,
        }
        .to_json_line()
        .expect("encodes");
        assert_eq!(
            line,
            r#"{"kind":"CoinCollected","i":-1,"j":2,"cache_coins":4,"points":1}"#
        );
    }

    #[test]
    fn rejection_carries_action_and_reason() {
        let line = Event::TransferRejected {
            i: 0,
            j: 0,
            action: "deposit",
            reason: "no_points",
        }
        .to_json_line()
        .expect("encodes");
        assert!(line.contains(r#""kind":"TransferRejected""#));
        assert!(line.contains(r#""reason":"no_points""#));
    }
}
