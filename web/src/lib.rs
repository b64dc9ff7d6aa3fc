use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod game;
mod source;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

/// Arguments come from the location hash, e.g. `#-vv&--width=4&--seed=42`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(location_hash.split(['#', '&']))
}

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();

    let args = parse_args(&location_hash).map_err(|err| JsValue::from_str(&err.to_string()))?;
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
    }
    log::debug!("args: {:?}", args);

    if let Err(err) = args.game.config().validate() {
        log::error!("invalid game config: {}", err);
        return Err(JsValue::from_str(&err.to_string()));
    }

    let root = document()
        .get_element_by_id("game")
        .ok_or_else(|| JsValue::from_str("Could not find id=\"game\" element"))?;

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jeopardy_core::{ConfigError, DEFAULT_API_BASE};

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse_args("").unwrap();

        assert_eq!(args.game.seed, None);
        let config = args.game.config();
        assert_eq!(config.width, 6);
        assert_eq!(config.rows, 5);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn hash_overrides_game_settings() {
        let args = parse_args("#-vv&--width=4&--rows=3&--seed=42").unwrap();

        assert_eq!(args.game.seed, Some(42));
        assert_eq!(args.game.config().width, 4);
        assert_eq!(args.game.config().rows, 3);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn oversized_width_fails_validation() {
        let args = parse_args("#--width=20").unwrap();

        assert!(matches!(
            args.game.config().validate(),
            Err(ConfigError::NotEnoughCategories { requested: 20, .. })
        ));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse_args("#--bogus").is_err());
    }
}
