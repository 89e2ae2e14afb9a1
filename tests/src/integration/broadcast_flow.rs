//! # Broadcast Flow
//!
//! Dispatch semantics end to end against the scripted sender: ordering,
//! pacing, partial failure, and the record that lands in the history log.

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::support::ScriptedSender;
    use autopost_broadcast::{BroadcastDispatcher, BroadcastRecord, TargetId};
    use autopost_store::{MemoryKvStore, StateRepository};
    use chrono::Utc;

    #[tokio::test]
    async fn test_empty_targets_issue_no_network_calls() {
        let sender = ScriptedSender::accepting();
        let dispatcher = BroadcastDispatcher::new(sender.clone());

        let results = dispatcher.dispatch(&[], "hello", Duration::ZERO).await;
        assert!(results.is_empty());
        assert!(sender.calls().is_empty());
    }

    #[tokio::test]
    async fn test_n_targets_produce_n_results_in_order() {
        let sender = ScriptedSender::accepting();
        let dispatcher = BroadcastDispatcher::new(sender.clone());
        let targets: Vec<TargetId> = (1..=5).map(TargetId::from).collect();

        let results = dispatcher.dispatch(&targets, "hello", Duration::ZERO).await;

        assert_eq!(results.len(), 5);
        let seen: Vec<TargetId> = results.iter().map(|r| r.target.clone()).collect();
        assert_eq!(seen, targets);
        assert!(sender.calls().iter().all(|(_, text)| text == "hello"));
    }

    #[tokio::test]
    async fn test_failing_target_is_recorded_and_batch_continues() {
        let targets = vec![TargetId::from("111"), TargetId::from("222")];
        let sender = ScriptedSender::failing_on(TargetId::from("222"));
        let dispatcher = BroadcastDispatcher::new(sender.clone());

        let results = dispatcher.dispatch(&targets, "hi", Duration::ZERO).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].target, TargetId::from("111"));
        assert!(results[0].ok);
        assert!(results[0].response.is_some());

        assert_eq!(results[1].target, TargetId::from("222"));
        assert!(!results[1].ok);
        assert!(results[1].error.as_deref().unwrap().contains("connect timeout"));
        assert_eq!(sender.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_dispatch_paces_with_the_configured_delay() {
        let sender = ScriptedSender::accepting();
        let dispatcher = BroadcastDispatcher::new(sender);
        let targets: Vec<TargetId> = (1..=3).map(TargetId::from).collect();
        let delay = Duration::from_millis(25);

        let started = Instant::now();
        let results = dispatcher.dispatch(&targets, "hi", delay).await;
        let elapsed = started.elapsed();

        assert_eq!(results.len(), 3);
        assert!(elapsed >= delay * 3, "batch finished too fast: {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_dispatch_results_round_trip_through_history() {
        let sender = ScriptedSender::failing_on(TargetId::from(222));
        let dispatcher = BroadcastDispatcher::new(sender);
        let targets = vec![TargetId::from(111), TargetId::from(222)];

        let results = dispatcher.dispatch(&targets, "hi", Duration::ZERO).await;
        let mut repo = StateRepository::new(Box::new(MemoryKvStore::new()));
        repo.record_broadcast(&BroadcastRecord {
            at: Utc::now(),
            message: "hi".to_string(),
            targets: targets.clone(),
            results,
        })
        .unwrap();

        let history = repo.history().unwrap();
        let entry = &history.as_array().unwrap()[0];
        assert_eq!(entry["message"], "hi");
        assert_eq!(entry["targets"], serde_json::json!([111, 222]));
        assert_eq!(entry["results"][0]["ok"], true);
        assert_eq!(entry["results"][1]["ok"], false);
        assert!(entry["results"][1]["error"].is_string());
    }
}
