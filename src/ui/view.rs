//! View model builder.
//!
//! Turns configuration, snapshot and modal into plain render data. Tiles
//! carry the entity key used to dispatch intents, never the secret itself.

use crate::app::widget::Modal;
use crate::config::AppEntry;
use crate::store::{lookup, Snapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub name: String,
    pub entity: String,
    /// Whether the store currently holds a non-empty value for the entity.
    pub has_value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub name: String,
    pub draft: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub tiles: Vec<Tile>,
    pub modal: Option<ModalView>,
}

pub fn build_view_model(config: &[AppEntry], snapshot: &Snapshot, modal: &Modal) -> ViewModel {
    let tiles = config
        .iter()
        .map(|app| Tile {
            name: app.name.clone(),
            entity: app.entity.clone(),
            has_value: !lookup(snapshot, &app.entity).is_empty(),
        })
        .collect();

    let modal = match modal {
        Modal::Open { app, draft } => Some(ModalView {
            name: app.name.clone(),
            draft: draft.clone(),
        }),
        Modal::Closed => None,
    };

    ViewModel { tiles, modal }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Vec<AppEntry> {
        vec![
            AppEntry::new("Email", "e1"),
            AppEntry::new("Bank", "b1"),
            AppEntry::new("Forum", "f1"),
        ]
    }

    fn snapshot() -> Snapshot {
        let mut s = Snapshot::new();
        s.insert("e1".into(), "hunter2".into());
        s.insert("b1".into(), String::new());
        s
    }

    #[test]
    fn test_one_tile_per_app_in_order() {
        let vm = build_view_model(&config(), &snapshot(), &Modal::Closed);
        let names: Vec<_> = vm.tiles.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Email", "Bank", "Forum"]);
        let entities: Vec<_> = vm.tiles.iter().map(|t| t.entity.as_str()).collect();
        assert_eq!(entities, ["e1", "b1", "f1"]);
        assert!(vm.modal.is_none());
    }

    #[test]
    fn test_tiles_never_carry_secret() {
        let vm = build_view_model(&config(), &snapshot(), &Modal::Closed);
        let rendered = format!("{:?}", vm);
        assert!(!rendered.contains("hunter2"));
        assert!(vm.tiles[0].has_value);
        assert!(!vm.tiles[1].has_value);
        assert!(!vm.tiles[2].has_value);
    }

    #[test]
    fn test_empty_config_and_snapshot() {
        let vm = build_view_model(&[], &Snapshot::new(), &Modal::Closed);
        assert!(vm.tiles.is_empty());
        assert!(vm.modal.is_none());
    }

    #[test]
    fn test_open_modal_descriptor() {
        let modal = Modal::Open {
            app: AppEntry::new("Bank", "b1"),
            draft: "draft".into(),
        };
        let vm = build_view_model(&config(), &snapshot(), &modal);
        assert_eq!(
            vm.modal,
            Some(ModalView {
                name: "Bank".into(),
                draft: "draft".into()
            })
        );
        assert_eq!(vm.tiles.len(), 3);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let modal = Modal::Open {
            app: AppEntry::new("Email", "e1"),
            draft: "x".into(),
        };
        let cfg = config();
        let snap = snapshot();
        let first = build_view_model(&cfg, &snap, &modal);
        let second = build_view_model(&cfg, &snap, &modal);
        assert_eq!(first, second);
        assert_eq!(cfg, config());
        assert_eq!(snap, snapshot());
    }
}
