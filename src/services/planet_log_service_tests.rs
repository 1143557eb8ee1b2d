// src/services/planet_log_service_tests.rs
//
// Controller scenarios: submit, delete, inline edit, persistence hand-off.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use tempfile::TempDir;

    use crate::db::test_support::temp_pool;
    use crate::domain::entry::invariants::{DUPLICATE_NAME_MESSAGE, NAME_LENGTH_MESSAGE};
    use crate::domain::{
        DomainError, EditMode, Entry, EntryCollection, EntryDraft, EntryField, EntryViolation,
        ImageUpload,
    };
    use crate::error::AppError;
    use crate::events::{
        DomainEvent, EventBus, PlanetDeleted, PlanetDescriptionUpdated, PlanetLogged,
    };
    use crate::infrastructure::PlanetStore;
    use crate::repositories::{MockLocalStorageRepository, SqliteLocalStorageRepository};
    use crate::services::{PlanetLogService, SubmitOutcome};

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    struct Harness {
        _temp: TempDir,
        storage: Arc<SqliteLocalStorageRepository>,
        bus: Arc<EventBus>,
        emitted: Arc<Mutex<Vec<&'static str>>>,
        service: PlanetLogService,
    }

    /// Record the type of every log event reaching `bus`
    fn record_events(bus: &EventBus) -> Arc<Mutex<Vec<&'static str>>> {
        let emitted = Arc::new(Mutex::new(Vec::new()));

        let sink = emitted.clone();
        bus.subscribe::<PlanetLogged, _>(move |e| sink.lock().unwrap().push(e.event_type()));
        let sink = emitted.clone();
        bus.subscribe::<PlanetDeleted, _>(move |e| sink.lock().unwrap().push(e.event_type()));
        let sink = emitted.clone();
        bus.subscribe::<PlanetDescriptionUpdated, _>(move |e| {
            sink.lock().unwrap().push(e.event_type())
        });

        emitted
    }

    impl Harness {
        fn new() -> Self {
            Self::seeded(&[])
        }

        /// Service whose store already holds `names`
        fn seeded(names: &[&str]) -> Self {
            let (temp, pool) = temp_pool();
            let storage = Arc::new(SqliteLocalStorageRepository::new(pool));

            if !names.is_empty() {
                let log: EntryCollection = names
                    .iter()
                    .map(|name| Entry::from_draft(name, &format!("All about {}", name), None))
                    .collect::<Vec<_>>()
                    .into();
                PlanetStore::new(storage.clone(), "planets").save(&log).unwrap();
            }

            let bus = Arc::new(EventBus::new());
            let emitted = record_events(&bus);
            let service =
                PlanetLogService::load(PlanetStore::new(storage.clone(), "planets"), bus.clone());

            Self {
                _temp: temp,
                storage,
                bus,
                emitted,
                service,
            }
        }

        fn emitted(&self) -> Vec<&'static str> {
            self.emitted.lock().unwrap().clone()
        }

        /// What a fresh session would load right now
        fn reloaded(&self) -> EntryCollection {
            PlanetStore::new(self.storage.clone(), "planets").load()
        }

        fn fill(&self, name: &str, description: &str) {
            self.service.set_name(name.to_string());
            self.service.set_description(description.to_string());
        }

        fn names(&self) -> Vec<String> {
            self.service
                .snapshot()
                .entries
                .entries()
                .iter()
                .map(|e| e.name.clone())
                .collect()
        }
    }

    // ========================================================================
    // STARTUP
    // ========================================================================

    #[test]
    fn test_starts_empty_without_stored_log() {
        let h = Harness::new();
        let state = h.service.snapshot();

        assert!(state.entries.is_empty());
        assert_eq!(state.draft, EntryDraft::default());
        assert_eq!(state.edit, EditMode::Viewing);
    }

    #[test]
    fn test_starts_from_stored_log() {
        let h = Harness::seeded(&["Mercury", "Venus"]);
        assert_eq!(h.names(), vec!["Mercury", "Venus"]);
    }

    // ========================================================================
    // SUBMIT
    // ========================================================================

    #[test]
    fn test_submit_valid_planet() {
        let h = Harness::new();
        h.fill("Mars", "Red planet with two moons");

        let outcome = h.service.submit().unwrap();

        assert_eq!(outcome, SubmitOutcome::Appended { index: 0 });
        let state = h.service.snapshot();
        assert_eq!(h.names(), vec!["Mars"]);
        assert_eq!(state.draft, EntryDraft::default());
        assert!(state.draft.errors.is_valid());
        assert_eq!(h.reloaded(), state.entries);
    }

    #[test]
    fn test_submit_stores_trimmed_fields() {
        let h = Harness::new();
        h.fill("  Saturn  ", "  Famous for its rings  ");

        h.service.submit().unwrap();

        let entry = h.service.snapshot().entries.get(0).cloned().unwrap();
        assert_eq!(entry.name, "Saturn");
        assert_eq!(entry.description, "Famous for its rings");
    }

    #[test]
    fn test_submit_short_name_is_rejected() {
        let h = Harness::new();
        h.fill("Ma", "ok desc");

        let outcome = h.service.submit().unwrap();

        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.get(EntryField::Name), Some(NAME_LENGTH_MESSAGE));
                assert!(!errors.has(EntryViolation::DescriptionInvalid));
            }
            other => panic!("expected rejection, got {:?}", other),
        }

        let state = h.service.snapshot();
        assert!(state.entries.is_empty());
        // Draft is kept so the user can fix it
        assert_eq!(state.draft.name, "Ma");
        assert!(state.draft.errors.has(EntryViolation::NameInvalid));
        assert!(h.reloaded().is_empty());
    }

    #[test]
    fn test_submit_duplicate_name_in_other_case() {
        let h = Harness::seeded(&["Mars"]);
        h.fill("mars", "Another take on the red planet");

        let outcome = h.service.submit().unwrap();

        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.get(EntryField::Name), Some(DUPLICATE_NAME_MESSAGE));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(h.names(), vec!["Mars"]);
    }

    #[test]
    fn test_submit_with_image() {
        let h = Harness::new();
        h.fill("Jupiter", "Largest planet");
        h.service
            .set_image(Some(ImageUpload::new("jupiter.jpg", "image/jpeg", vec![1, 2, 3])));

        h.service.submit().unwrap();

        let reloaded = h.reloaded();
        let image = reloaded.get(0).unwrap().image.clone().unwrap();
        assert!(image.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_submit_rejects_bad_image() {
        let h = Harness::new();
        h.fill("Jupiter", "Largest planet");
        h.service
            .set_image(Some(ImageUpload::new("jupiter.gif", "image/gif", vec![1, 2, 3])));

        let outcome = h.service.submit().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected(ref e) if e.has(EntryViolation::ImageInvalid)));

        // Picking a new file clears the image message
        h.service.set_image(None);
        assert!(h.service.snapshot().draft.errors.get(EntryField::Image).is_none());
    }

    #[test]
    fn test_submit_emits_event() {
        let h = Harness::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = seen.clone();
        h.bus.subscribe::<PlanetLogged, _>(move |event| {
            assert_eq!(event.name, "Mars");
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        h.fill("Ma", "too short name");
        h.service.submit().unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 0);

        h.fill("Mars", "Red planet with two moons");
        h.service.submit().unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    // ========================================================================
    // DELETE
    // ========================================================================

    #[test]
    fn test_delete_middle_row() {
        let h = Harness::seeded(&["Mercury", "Venus", "Earth"]);

        h.service.delete(1).unwrap();

        assert_eq!(h.names(), vec!["Mercury", "Earth"]);
        assert_eq!(h.reloaded(), h.service.snapshot().entries);
        assert_eq!(h.emitted(), vec!["PlanetDeleted"]);
    }

    #[test]
    fn test_delete_out_of_bounds() {
        let h = Harness::seeded(&["Mercury"]);

        let err = h.service.delete(5).unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::IndexOutOfBounds { index: 5, len: 1 })
        ));
        assert_eq!(h.names(), vec!["Mercury"]);
        assert!(h.emitted().is_empty());
    }

    #[test]
    fn test_deleting_a_row_above_the_edit_keeps_editing_same_planet() {
        let h = Harness::seeded(&["Mercury", "Venus", "Earth"]);
        h.service.begin_edit(2).unwrap();

        h.service.delete(0).unwrap();

        assert_eq!(h.service.snapshot().edit.editing_index(), Some(1));
        h.service.set_edit_description("Blue marble".to_string()).unwrap();
        h.service.save_edit(1).unwrap();
        assert_eq!(
            h.service.snapshot().entries.get(1).unwrap().description,
            "Blue marble"
        );
    }

    #[test]
    fn test_deleting_the_edited_row_leaves_edit_mode() {
        let h = Harness::seeded(&["Mercury", "Venus"]);
        h.service.begin_edit(1).unwrap();

        h.service.delete(1).unwrap();

        assert_eq!(h.service.snapshot().edit, EditMode::Viewing);
    }

    // ========================================================================
    // INLINE EDIT
    // ========================================================================

    #[test]
    fn test_edit_flow() {
        let h = Harness::seeded(&["Mercury", "Venus"]);

        h.service.begin_edit(0).unwrap();
        assert_eq!(
            h.service.snapshot().edit,
            EditMode::Editing {
                index: 0,
                draft_description: "All about Mercury".to_string()
            }
        );

        h.service.set_edit_description("New text".to_string()).unwrap();
        h.service.save_edit(0).unwrap();

        let state = h.service.snapshot();
        assert_eq!(state.edit, EditMode::Viewing);
        assert_eq!(state.entries.get(0).unwrap().description, "New text");
        assert_eq!(state.entries.get(0).unwrap().name, "Mercury");
        assert_eq!(state.entries.get(1).unwrap().description, "All about Venus");
        assert_eq!(h.reloaded(), state.entries);
        assert_eq!(h.emitted(), vec!["PlanetDescriptionUpdated"]);
    }

    #[test]
    fn test_saved_edit_skips_length_validation() {
        // Creation requires 5..=500 characters; edits are stored as typed
        let h = Harness::seeded(&["Mercury"]);

        h.service.begin_edit(0).unwrap();
        h.service.set_edit_description("  ".to_string()).unwrap();
        h.service.save_edit(0).unwrap();

        assert_eq!(h.service.snapshot().entries.get(0).unwrap().description, "  ");
    }

    #[test]
    fn test_save_without_edit_fails() {
        let h = Harness::seeded(&["Mercury"]);

        let err = h.service.save_edit(0).unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidStateTransition(_))
        ));
        assert!(h.service.set_edit_description("x".to_string()).is_err());
    }

    #[test]
    fn test_save_for_other_row_fails_and_keeps_editing() {
        let h = Harness::seeded(&["Mercury", "Venus"]);
        h.service.begin_edit(0).unwrap();

        assert!(h.service.save_edit(1).is_err());
        assert_eq!(h.service.snapshot().edit.editing_index(), Some(0));
    }

    #[test]
    fn test_begin_edit_out_of_bounds() {
        let h = Harness::new();

        assert!(h.service.begin_edit(0).is_err());
        assert_eq!(h.service.snapshot().edit, EditMode::Viewing);
    }

    #[test]
    fn test_edit_event_reaches_subscriber() {
        let h = Harness::seeded(&["Mercury"]);
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = seen.clone();
        h.bus.subscribe::<PlanetDescriptionUpdated, _>(move |event| {
            seen_clone.store(event.index + 1, Ordering::SeqCst);
        });

        h.service.begin_edit(0).unwrap();
        h.service.save_edit(0).unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    // ========================================================================
    // NARROW READS
    // ========================================================================

    #[test]
    fn test_draft_read_reflects_typing() {
        let h = Harness::seeded(&["Mercury"]);
        h.fill("Me", "tiny");
        h.service.submit().unwrap();
        assert!(h.service.draft().errors.has(EntryViolation::NameInvalid));

        h.service.set_name("Mars".to_string());

        let draft = h.service.draft();
        assert_eq!(draft.name, "Mars");
        assert!(!draft.errors.has(EntryViolation::NameInvalid));
        assert!(draft.errors.has(EntryViolation::DescriptionInvalid));
    }

    #[test]
    fn test_edit_mode_read_follows_transitions() {
        let h = Harness::seeded(&["Mercury"]);
        assert_eq!(h.service.edit_mode(), EditMode::Viewing);

        h.service.begin_edit(0).unwrap();
        h.service.set_edit_description("Smallest planet".to_string()).unwrap();
        assert_eq!(
            h.service.edit_mode(),
            EditMode::Editing {
                index: 0,
                draft_description: "Smallest planet".to_string()
            }
        );

        h.service.save_edit(0).unwrap();
        assert_eq!(h.service.edit_mode(), EditMode::Viewing);
    }

    #[test]
    fn test_mutations_keep_every_other_entry() {
        let h = Harness::seeded(&["Mercury", "Venus", "Earth"]);
        h.fill("Mars", "Red planet with two moons");
        h.service.submit().unwrap();
        h.service.delete(0).unwrap();
        h.service.begin_edit(1).unwrap();
        h.service.save_edit(1).unwrap();

        assert_eq!(h.names(), vec!["Venus", "Earth", "Mars"]);
        assert_eq!(h.reloaded(), h.service.snapshot().entries);
    }

    // ========================================================================
    // PERSISTENCE FAILURES
    // ========================================================================

    #[test]
    fn test_save_failure_does_not_block_mutation() {
        let mut storage = MockLocalStorageRepository::new();
        storage.expect_get_item().returning(|_| Ok(None));
        storage
            .expect_set_item()
            .times(1)
            .returning(|_, _| Err(AppError::Other("storage unavailable".to_string())));

        let service = PlanetLogService::load(
            PlanetStore::new(Arc::new(storage), "planets"),
            Arc::new(EventBus::new()),
        );
        service.set_name("Neptune".to_string());
        service.set_description("Windiest planet".to_string());

        let outcome = service.submit().unwrap();

        assert_eq!(outcome, SubmitOutcome::Appended { index: 0 });
        assert_eq!(service.snapshot().entries.len(), 1);
    }

    #[test]
    fn test_rejected_submit_does_not_touch_storage() {
        let mut storage = MockLocalStorageRepository::new();
        storage.expect_get_item().returning(|_| Ok(None));
        storage.expect_set_item().times(0);

        let service = PlanetLogService::load(
            PlanetStore::new(Arc::new(storage), "planets"),
            Arc::new(EventBus::new()),
        );

        let outcome = service.submit().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    }
}
