//! Property-based tests for the state machine
//!
//! Commands refer to conversations by index into the live list so that
//! generated sequences stay meaningful as conversations come and go.

use super::*;
use crate::conversation::{ConversationId, Message};
use crate::host::{HostMessage, HostSnapshot};
use crate::model::{ModelCatalog, ModelId};
use crate::settings::Settings;
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Arbitrary Generators
// ============================================================================

#[derive(Debug, Clone)]
enum Command {
    New { from: Option<usize> },
    Remove(usize),
    Append(usize),
    SetModel(usize, ModelId),
    ToggleMenu,
}

fn arb_model() -> impl Strategy<Value = ModelId> {
    prop_oneof![
        Just(ModelId::gpt_35_turbo()),
        Just(ModelId::gpt_4()),
        Just(ModelId::gpt_4_32k()),
    ]
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => proptest::option::of(0usize..8).prop_map(|from| Command::New { from }),
        1 => (0usize..8).prop_map(Command::Remove),
        2 => (0usize..8).prop_map(Command::Append),
        3 => ((0usize..8), arb_model()).prop_map(|(i, m)| Command::SetModel(i, m)),
        1 => Just(Command::ToggleMenu),
    ]
}

fn arb_settings() -> impl Strategy<Value = Settings> {
    (
        proptest::option::of(arb_model()),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(model, minimal_ui, single)| {
            let mut settings = Settings::default()
                .with_minimal_ui(minimal_ui)
                .with_single_conversation(single);
            if let Some(model) = model {
                settings = settings.with_default_model(model);
            }
            settings
        })
}

fn id_at(state: &PanelState, index: usize) -> Option<ConversationId> {
    let list = state.conversations.list();
    if list.is_empty() {
        None
    } else {
        Some(list[index % list.len()].id.clone())
    }
}

fn to_event(state: &PanelState, command: &Command) -> Option<Event> {
    match command {
        Command::New { from } => Some(Event::NewConversation {
            from: from.and_then(|i| id_at(state, i)),
        }),
        Command::Remove(i) => id_at(state, *i).map(|id| Event::RemoveConversation { id }),
        Command::Append(i) => id_at(state, *i).map(|conversation_id| Event::AppendMessage {
            conversation_id,
            message: Message::assistant("ok"),
        }),
        Command::SetModel(i, model) => {
            id_at(state, *i).map(|conversation_id| Event::SetModel {
                conversation_id,
                model: model.clone(),
            })
        }
        Command::ToggleMenu => Some(Event::ToggleModelMenu),
    }
}

/// Run commands, returning every id ever created
fn run(state: &mut PanelState, host: &HostSnapshot, commands: &[Command]) -> Vec<ConversationId> {
    let mut created = Vec::new();
    for command in commands {
        let Some(event) = to_event(state, command) else {
            continue;
        };
        let result = transition(state, host, event).expect("events target live conversations");
        for effect in result.effects {
            if let Effect::Navigate { conversation_id } = effect {
                created.push(conversation_id);
            }
        }
    }
    created
}

// ============================================================================
// Invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_titles_unique(
        settings in arb_settings(),
        commands in proptest::collection::vec(arb_command(), 0..40),
    ) {
        let host = HostSnapshot::new(settings, ModelCatalog::new());
        let mut state = PanelState::default();
        run(&mut state, &host, &commands);

        let titles: HashSet<&str> = state.conversations.titles().collect();
        prop_assert_eq!(titles.len(), state.conversations.len());
    }

    #[test]
    fn prop_ids_never_reused(
        settings in arb_settings(),
        commands in proptest::collection::vec(arb_command(), 0..40),
    ) {
        let host = HostSnapshot::new(settings, ModelCatalog::new());
        let mut state = PanelState::default();
        let created = run(&mut state, &host, &commands);

        let distinct: HashSet<&ConversationId> = created.iter().collect();
        prop_assert_eq!(distinct.len(), created.len());
    }

    #[test]
    fn prop_single_conversation_mode_keeps_one(
        commands in proptest::collection::vec(arb_command(), 1..30),
    ) {
        let host = HostSnapshot::new(
            Settings::default().with_single_conversation(true),
            ModelCatalog::new(),
        );
        let mut state = PanelState::default();
        run(&mut state, &host, &commands);
        prop_assert!(state.conversations.len() <= 1);

        transition(&mut state, &host, Event::NewConversation { from: None }).unwrap();
        prop_assert_eq!(state.conversations.len(), 1);
    }

    #[test]
    fn prop_history_freezes_model(
        settings in arb_settings(),
        commands in proptest::collection::vec(arb_command(), 0..20),
        target in 0usize..8,
        model in arb_model(),
    ) {
        let host = HostSnapshot::new(settings, ModelCatalog::new());
        let mut state = PanelState::default();
        run(&mut state, &host, &commands);
        transition(&mut state, &host, Event::NewConversation { from: None }).unwrap();

        let id = id_at(&state, target).unwrap();
        state.conversations.append_message(&id, Message::user("hello"));
        let original = state.conversation(&id).unwrap().clone();
        prop_assume!(original.model != model);
        let before: Vec<ConversationId> =
            state.conversations.list().iter().map(|c| c.id.clone()).collect();

        transition(&mut state, &host, Event::SetModel { conversation_id: id.clone(), model: model.clone() }).unwrap();

        let after = state.conversations.list();
        let new: Vec<_> = after.iter().filter(|c| !before.contains(&c.id)).collect();
        prop_assert_eq!(new.len(), 1);
        prop_assert_eq!(&new[0].model, &model);
        prop_assert!(new[0].messages.is_empty());

        if host.settings.disable_multiple_conversations {
            prop_assert_eq!(after.len(), 1);
        } else {
            prop_assert_eq!(state.conversation(&id), Some(&original));
            prop_assert_eq!(after.len(), before.len() + 1);
        }
    }

    #[test]
    fn prop_empty_history_updates_in_place(
        settings in arb_settings(),
        model in arb_model(),
    ) {
        let host = HostSnapshot::new(settings, ModelCatalog::new());
        let mut state = PanelState::default();
        transition(&mut state, &host, Event::NewConversation { from: None }).unwrap();
        let id = id_at(&state, 0).unwrap();

        let result = transition(&mut state, &host, Event::SetModel { conversation_id: id.clone(), model: model.clone() }).unwrap();

        prop_assert_eq!(state.conversations.len(), 1);
        prop_assert_eq!(&state.conversation(&id).unwrap().model, &model);
        let navigated = result
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Navigate { .. }));
        prop_assert!(!navigated);
    }

    #[test]
    fn prop_set_model_closes_menu_and_notifies_host_first(
        settings in arb_settings(),
        commands in proptest::collection::vec(arb_command(), 0..20),
        target in 0usize..8,
        model in arb_model(),
        open_menu in any::<bool>(),
    ) {
        let host = HostSnapshot::new(settings, ModelCatalog::new());
        let mut state = PanelState::default();
        run(&mut state, &host, &commands);
        transition(&mut state, &host, Event::NewConversation { from: None }).unwrap();
        if open_menu && !state.menu.is_open() {
            state.menu.toggle();
        }
        let id = id_at(&state, target).unwrap();

        let result = transition(&mut state, &host, Event::SetModel { conversation_id: id.clone(), model: model.clone() }).unwrap();

        prop_assert!(!state.menu.is_open());
        prop_assert_eq!(
            result.effects.first(),
            Some(&Effect::PostToHost(HostMessage::SetModel { value: model, conversation_id: id }))
        );
    }

    #[test]
    fn prop_same_model_changes_nothing(
        settings in arb_settings(),
        commands in proptest::collection::vec(arb_command(), 0..20),
        target in 0usize..8,
    ) {
        let host = HostSnapshot::new(settings, ModelCatalog::new());
        let mut state = PanelState::default();
        run(&mut state, &host, &commands);
        transition(&mut state, &host, Event::NewConversation { from: None }).unwrap();
        let id = id_at(&state, target).unwrap();
        let model = state.conversation(&id).unwrap().model.clone();
        let before = state.conversations.list().to_vec();

        transition(&mut state, &host, Event::SetModel { conversation_id: id, model }).unwrap();

        prop_assert_eq!(state.conversations.list(), before.as_slice());
    }
}
