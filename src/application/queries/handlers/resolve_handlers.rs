//! Resolve Query Handler - 音色解析
//!
//! 两阶段读取:
//! 1. 取出 campaign model 下全部活跃关联，均匀随机选一个
//! 2. 拉取该关联的录音并按分类名排序

use std::sync::Arc;

use crate::application::error::{ApplicationError, ResolvePhase};
use crate::application::ports::{IndexPickerPort, VoiceCatalogPort};
use crate::application::queries::ResolveVoice;
use crate::domain::voice::{ActiveVoice, CampaignModelId, CategorizedRecording, ResolvedVoice};

/// ResolveVoice Handler
pub struct ResolveVoiceHandler {
    catalog: Arc<dyn VoiceCatalogPort>,
    picker: Arc<dyn IndexPickerPort>,
}

impl ResolveVoiceHandler {
    pub fn new(catalog: Arc<dyn VoiceCatalogPort>, picker: Arc<dyn IndexPickerPort>) -> Self {
        Self { catalog, picker }
    }

    pub async fn handle(&self, query: ResolveVoice) -> Result<ResolvedVoice, ApplicationError> {
        let campaign_model_id = CampaignModelId::parse(&query.campaign_model_id)?;

        let voice = self.select_voice(campaign_model_id).await?;

        let recordings: Vec<CategorizedRecording> = self
            .catalog
            .find_recordings(voice.association_id)
            .await
            .map_err(|e| ApplicationError::store(ResolvePhase::FetchRecordings, e))?
            .into_iter()
            .map(CategorizedRecording::from)
            .collect();

        tracing::debug!(
            campaign_model_id = %campaign_model_id,
            association_id = %voice.association_id,
            recordings = recordings.len(),
            "Voice resolved"
        );

        Ok(ResolvedVoice::new(voice, recordings))
    }

    /// 阶段一：在全部候选上均匀随机
    async fn select_voice(
        &self,
        campaign_model_id: CampaignModelId,
    ) -> Result<ActiveVoice, ApplicationError> {
        let mut candidates = self
            .catalog
            .find_active_voices(campaign_model_id)
            .await
            .map_err(|e| ApplicationError::store(ResolvePhase::SelectVoice, e))?;

        if candidates.is_empty() {
            return Err(ApplicationError::NotFound(campaign_model_id));
        }

        let eligible = candidates.len();
        let index = self.picker.pick(eligible);
        debug_assert!(index < eligible, "picker returned {index} for {eligible} candidates");
        let selected = ActiveVoice::from(candidates.swap_remove(index));

        tracing::debug!(
            campaign_model_id = %campaign_model_id,
            eligible = eligible,
            association_id = %selected.association_id,
            voice_name = %selected.voice_name,
            "Active voice selected"
        );

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::application::error::ErrorKind;
    use crate::infrastructure::adapters::random::{FixedPicker, SeededPicker};
    use crate::infrastructure::memory::{CatalogOperation, InMemoryVoiceCatalog, InjectedFailure};

    fn handler(catalog: Arc<InMemoryVoiceCatalog>, picker: Arc<dyn IndexPickerPort>) -> ResolveVoiceHandler {
        ResolveVoiceHandler::new(catalog, picker)
    }

    #[tokio::test]
    async fn test_invalid_argument_skips_store() {
        let catalog = Arc::new(InMemoryVoiceCatalog::new().with_voice(1, 10, "Aria", true));
        let handler = handler(catalog.clone(), Arc::new(FixedPicker::new(0)));

        for raw in ["abc", "-1", "", "1.0", "１"] {
            let err = handler.handle(ResolveVoice::new(raw)).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "input {raw:?}");
        }
        assert_eq!(catalog.store_calls(), 0);
    }

    #[tokio::test]
    async fn test_not_found_when_only_inactive() {
        let catalog = Arc::new(
            InMemoryVoiceCatalog::new()
                .with_voice(3, 30, "Echo", false)
                .with_voice(3, 31, "Sage", false),
        );
        let handler = handler(catalog.clone(), Arc::new(FixedPicker::new(0)));

        let err = handler.handle(ResolveVoice::new("3")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = handler.handle(ResolveVoice::new("999")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_single_active_voice_is_deterministic() {
        let catalog = Arc::new(
            InMemoryVoiceCatalog::new()
                .with_voice(1, 10, "Aria", true)
                .with_voice(1, 11, "Muted", false)
                .with_voice(2, 20, "Other", true),
        );
        let handler = handler(catalog, Arc::new(SeededPicker::new(7)));

        for _ in 0..50 {
            let resolved = handler.handle(ResolveVoice::new("1")).await.unwrap();
            assert_eq!(resolved.voice_name(), "Aria");
            assert_eq!(resolved.association_id().value(), 10);
            assert!(resolved.recordings().is_empty());
        }
    }

    #[tokio::test]
    async fn test_recordings_sorted_and_scoped_to_selection() {
        let catalog = Arc::new(
            InMemoryVoiceCatalog::new()
                .with_voice(2, 20, "Nova", true)
                .with_voice(5, 50, "Elsewhere", true)
                .with_recording(20, "Greeting", "hello.wav")
                .with_recording(20, "Farewell", "bye.wav")
                .with_recording(50, "Alpha", "not-mine.wav"),
        );
        let handler = handler(catalog, Arc::new(FixedPicker::new(0)));

        let resolved = handler.handle(ResolveVoice::new("2")).await.unwrap();
        assert_eq!(resolved.voice_name(), "Nova");
        assert_eq!(
            resolved.recordings(),
            &[
                CategorizedRecording::new("Farewell", "bye.wav"),
                CategorizedRecording::new("Greeting", "hello.wav"),
            ]
        );
    }

    #[tokio::test]
    async fn test_selection_is_roughly_uniform() {
        let catalog = Arc::new(
            InMemoryVoiceCatalog::new()
                .with_voice(4, 40, "A", true)
                .with_voice(4, 41, "B", true)
                .with_voice(4, 42, "C", true)
                .with_voice(4, 43, "Inactive", false),
        );
        let handler = handler(catalog, Arc::new(SeededPicker::new(42)));

        let trials = 3000;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..trials {
            let resolved = handler.handle(ResolveVoice::new("4")).await.unwrap();
            *counts.entry(resolved.voice_name().to_string()).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        assert!(!counts.contains_key("Inactive"));
        for (name, count) in counts {
            assert!(
                (800..=1200).contains(&count),
                "{name} selected {count} times out of {trials}"
            );
        }
    }

    #[tokio::test]
    async fn test_phase_one_failure() {
        let catalog = Arc::new(InMemoryVoiceCatalog::new().with_voice(1, 10, "Aria", true));
        catalog.fail_on(CatalogOperation::FindActiveVoices, InjectedFailure::Unavailable);
        let handler = handler(catalog, Arc::new(FixedPicker::new(0)));

        let err = handler.handle(ResolveVoice::new("1")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
        assert_eq!(err.phase(), Some(ResolvePhase::SelectVoice));
    }

    #[tokio::test]
    async fn test_phase_two_failures() {
        let cases = [
            (InjectedFailure::QueryFailed, ErrorKind::StoreQueryFailed),
            (InjectedFailure::Corrupted, ErrorKind::StoreReadCorruption),
            (InjectedFailure::IterationFailed, ErrorKind::StoreQueryFailed),
        ];

        for (failure, expected) in cases {
            let catalog = Arc::new(
                InMemoryVoiceCatalog::new()
                    .with_voice(2, 20, "Nova", true)
                    .with_recording(20, "Greeting", "hello.wav"),
            );
            catalog.fail_on(CatalogOperation::FindRecordings, failure);
            let handler = handler(catalog, Arc::new(FixedPicker::new(0)));

            let err = handler.handle(ResolveVoice::new("2")).await.unwrap_err();
            assert_eq!(err.kind(), expected);
            assert_eq!(err.phase(), Some(ResolvePhase::FetchRecordings));
        }
    }

    /// 在阶段一与阶段二之间删除被选中的关联
    struct RemovingPicker {
        catalog: Arc<InMemoryVoiceCatalog>,
        association_id: i64,
    }

    impl IndexPickerPort for RemovingPicker {
        fn pick(&self, _len: usize) -> usize {
            self.catalog.remove_association(self.association_id);
            0
        }
    }

    #[tokio::test]
    async fn test_association_removed_between_phases() {
        let catalog = Arc::new(
            InMemoryVoiceCatalog::new()
                .with_voice(6, 60, "Vanishing", true)
                .with_recording(60, "Greeting", "hello.wav"),
        );
        let picker = Arc::new(RemovingPicker {
            catalog: catalog.clone(),
            association_id: 60,
        });
        let handler = handler(catalog, picker);

        let resolved = handler.handle(ResolveVoice::new("6")).await.unwrap();
        assert_eq!(resolved.voice_name(), "Vanishing");
        assert!(resolved.recordings().is_empty());
    }

    struct OutOfRangePicker;

    impl IndexPickerPort for OutOfRangePicker {
        fn pick(&self, len: usize) -> usize {
            len
        }
    }

    #[tokio::test]
    #[should_panic]
    async fn test_out_of_range_pick_is_not_clamped() {
        let catalog = Arc::new(
            InMemoryVoiceCatalog::new()
                .with_voice(7, 70, "First", true)
                .with_voice(7, 71, "Last", true),
        );
        let handler = handler(catalog, Arc::new(OutOfRangePicker));

        let _ = handler.handle(ResolveVoice::new("7")).await;
    }
}
