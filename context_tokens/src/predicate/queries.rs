//! Built-in queries about the host's runtime context.

use game_world::{HostState, ScreenId, ScreenState};

use super::QueryRegistry;

/// Register the host-context queries under `prefix`.
///
/// Formats, with the default `Esca.EMP_` prefix:
/// - `Esca.EMP_IS_WORLD_READY`
/// - `Esca.EMP_IS_SPLIT_SCREEN`
/// - `Esca.EMP_IS_PLAYER_FREE`
/// - `Esca.EMP_CAN_PLAYER_MOVE`
/// - `Esca.EMP_IS_TIME_PASSING`
/// - `Esca.EMP_HAS_MOD <mod ID>+` (true if any listed mod is installed)
pub fn register_context_queries(registry: &mut QueryRegistry, prefix: &str) {
    registry.register(&format!("{prefix}IS_WORLD_READY"), |_, host, _| {
        host.is_world_ready()
    });
    registry.register(&format!("{prefix}IS_SPLIT_SCREEN"), |_, host, _| {
        host.ready_world().is_some_and(|world| world.is_split_screen())
    });
    registry.register(&format!("{prefix}IS_PLAYER_FREE"), |_, host, screen| {
        screen_state(host, screen).is_some_and(|state| state.player_free)
    });
    registry.register(&format!("{prefix}CAN_PLAYER_MOVE"), |_, host, screen| {
        screen_state(host, screen).is_some_and(|state| state.can_move)
    });
    registry.register(&format!("{prefix}IS_TIME_PASSING"), |_, host, _| {
        host.ready_world().is_some_and(|world| world.should_time_pass())
    });

    let has_mod = format!("{prefix}HAS_MOD");
    let query_name = has_mod.clone();
    registry.register(&has_mod, move |args, host, _| {
        if args.is_empty() {
            tracing::warn!("{query_name} requires at least one mod ID");
            return false;
        }
        args.iter().any(|id| host.is_mod_loaded(id))
    });
}

fn screen_state(host: &HostState, screen: ScreenId) -> Option<&ScreenState> {
    host.ready_world()?.screen(screen)
}
