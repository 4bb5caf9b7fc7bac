// src/ui/state.rs - Application state management and context

use dioxus::prelude::*;

use crate::ar::{PropTag, Selection};
use crate::ui::services::use_services;
use crate::ui::{Notification, NotificationType};

/// Camera permission as the UI sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Unknown,
    Granted,
    Denied,
}

/// Application state context that provides global state to all components
#[derive(Debug, Clone, PartialEq)]
pub struct AppStateContext {
    pub camera_permission: PermissionState,
    pub selection: Selection,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub notifications: Vec<Notification>,
}

impl Default for AppStateContext {
    fn default() -> Self {
        Self {
            camera_permission: PermissionState::Unknown,
            selection: Selection::none(),
            is_loading: false,
            error_message: None,
            notifications: Vec::new(),
        }
    }
}

/// Actions that can be performed on the application state
#[derive(Debug, Clone)]
pub enum AppAction {
    SetPermission(PermissionState),
    Select(PropTag),
    ClearSelection,
    SetLoading(bool),
    SetError(Option<String>),
    AddNotification(Notification),
    RemoveNotification(uuid::Uuid),
    ClearNotifications,
}

/// State reducer function
pub fn app_state_reducer(state: &AppStateContext, action: AppAction) -> AppStateContext {
    let mut new_state = state.clone();

    match action {
        AppAction::SetPermission(permission) => {
            new_state.camera_permission = permission;
        }
        AppAction::Select(tag) => {
            new_state.selection.select(tag);
        }
        AppAction::ClearSelection => {
            new_state.selection.clear();
        }
        AppAction::SetLoading(loading) => {
            new_state.is_loading = loading;
        }
        AppAction::SetError(error) => {
            new_state.error_message = error;
        }
        AppAction::AddNotification(notification) => {
            new_state.notifications.push(notification);
        }
        AppAction::RemoveNotification(id) => {
            new_state.notifications.retain(|n| n.id != id);
        }
        AppAction::ClearNotifications => {
            new_state.notifications.clear();
        }
    }

    new_state
}

/// Application state provider component
#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let mut camera_permission = use_signal(|| PermissionState::Unknown);
    let mut selection = use_signal(Selection::none);
    let mut is_loading = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut notifications = use_signal(Vec::<Notification>::new);

    let get_state = use_callback(move |_: ()| AppStateContext {
        camera_permission: camera_permission(),
        selection: selection(),
        is_loading: is_loading(),
        error_message: error_message(),
        notifications: notifications(),
    });

    let dispatch = use_callback(move |action: AppAction| match action {
        AppAction::SetPermission(permission) => camera_permission.set(permission),
        AppAction::Select(tag) => selection.with_mut(|s| s.select(tag)),
        AppAction::ClearSelection => selection.with_mut(|s| s.clear()),
        AppAction::SetLoading(loading) => is_loading.set(loading),
        AppAction::SetError(error) => error_message.set(error),
        AppAction::AddNotification(notification) => {
            notifications.with_mut(|n| n.push(notification));
        }
        AppAction::RemoveNotification(id) => {
            notifications.with_mut(|n| n.retain(|notification| notification.id != id));
        }
        AppAction::ClearNotifications => notifications.set(Vec::new()),
    });

    use_context_provider(|| get_state);
    use_context_provider(|| dispatch);

    rsx! {
        {children}
    }
}

/// Hook to access the current application state
pub fn use_app_state() -> AppStateContext {
    let get_state = use_context::<Callback<(), AppStateContext>>();
    get_state(())
}

/// Hook to dispatch actions to the application state
pub fn use_app_dispatch() -> Callback<AppAction> {
    use_context::<Callback<AppAction>>()
}

/// Hook that requests camera permission once per session and reports the
/// current answer. Screens that need the camera call this before arming
/// the scanner.
pub fn use_permission_gate() -> PermissionState {
    let state = use_app_state();
    let dispatch = use_app_dispatch();
    let services = use_services();

    let mut requested = use_signal(|| false);
    if state.camera_permission == PermissionState::Unknown && !requested() {
        requested.set(true);

        if let Some(services) = services {
            spawn(async move {
                let granted = match services.platform.request_camera_permission().await {
                    Ok(granted) => granted,
                    Err(e) => {
                        tracing::error!("camera permission request failed: {e}");
                        false
                    }
                };
                dispatch(AppAction::SetPermission(if granted {
                    PermissionState::Granted
                } else {
                    PermissionState::Denied
                }));
            });
        } else {
            dispatch(AppAction::SetPermission(PermissionState::Denied));
        }
    }

    state.camera_permission
}

/// Hook for the AR selection binding: current value plus the select and
/// clear callbacks handed to the scene.
pub fn use_selection() -> (Selection, Callback<PropTag>, Callback<()>) {
    let state = use_app_state();
    let dispatch = use_app_dispatch();

    let select = use_callback({
        let dispatch = dispatch.clone();
        move |tag: PropTag| dispatch(AppAction::Select(tag))
    });

    let clear = use_callback(move |_: ()| dispatch(AppAction::ClearSelection));

    (state.selection, select, clear)
}

/// Hook for notification helpers.
pub fn use_notifications() -> (Vec<Notification>, Callback<Notification>, Callback<uuid::Uuid>) {
    let state = use_app_state();
    let dispatch = use_app_dispatch();

    let add = use_callback({
        let dispatch = dispatch.clone();
        move |notification: Notification| dispatch(AppAction::AddNotification(notification))
    });

    let remove = use_callback(move |id: uuid::Uuid| dispatch(AppAction::RemoveNotification(id)));

    (state.notifications, add, remove)
}

/// Builds a notification with defaults filled in.
pub fn notify(title: impl Into<String>, message: impl Into<String>, kind: NotificationType) -> Notification {
    Notification {
        id: uuid::Uuid::new_v4(),
        title: title.into(),
        message: message.into(),
        notification_type: kind,
        timestamp: chrono::Utc::now(),
        read: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_state() {
        let state = AppStateContext::default();
        assert_eq!(state.camera_permission, PermissionState::Unknown);
        assert_eq!(state.selection.get(), None);
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_app_state_reducer() {
        let initial_state = AppStateContext::default();

        let new_state = app_state_reducer(&initial_state, AppAction::SetLoading(true));
        assert!(new_state.is_loading);

        let new_state = app_state_reducer(
            &initial_state,
            AppAction::SetPermission(PermissionState::Denied),
        );
        assert_eq!(new_state.camera_permission, PermissionState::Denied);

        let error_msg = "Test error".to_string();
        let new_state =
            app_state_reducer(&initial_state, AppAction::SetError(Some(error_msg.clone())));
        assert_eq!(new_state.error_message, Some(error_msg));
    }

    #[test]
    fn test_selection_actions() {
        let initial_state = AppStateContext::default();

        let selected = app_state_reducer(&initial_state, AppAction::Select(PropTag::Min));
        assert_eq!(selected.selection.get(), Some(PropTag::Min));

        let overwritten = app_state_reducer(&selected, AppAction::Select(PropTag::Max));
        assert_eq!(overwritten.selection.get(), Some(PropTag::Max));

        let cleared = app_state_reducer(&overwritten, AppAction::ClearSelection);
        assert_eq!(cleared.selection.get(), None);
    }

    #[test]
    fn test_notification_actions() {
        let initial_state = AppStateContext::default();
        let notification = notify("Test", "Test message", NotificationType::Info);

        let new_state = app_state_reducer(
            &initial_state,
            AppAction::AddNotification(notification.clone()),
        );
        assert_eq!(new_state.notifications.len(), 1);

        let final_state =
            app_state_reducer(&new_state, AppAction::RemoveNotification(notification.id));
        assert!(final_state.notifications.is_empty());
    }
}
