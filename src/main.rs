// src/main.rs
//
// Calculatrice RPN : point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------
// - NATIF : eframe::run_native, ou calcul unique si une expression est passée en argument
//           (ex: `calculatrice_rpn "2+3×4"` affiche 14)
// - WEB   : eframe::WebRunner sur <canvas id="the_canvas_id">
// - Logs  : env_logger en natif (RUST_LOG / CALC_LOG), WebLogger en web

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod config;
mod noyau;

use app::AppCalc;
use config::Reglages;

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let reglages = Reglages::depuis_env();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(reglages.niveau_log.as_str()),
    )
    .init();

    // Mode ligne de commande : les arguments forment l’expression
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        match calcul_unique(&args) {
            Ok(texte) => {
                println!("{texte}");
                return Ok(());
            }
            Err(e) => {
                eprintln!("erreur: {e}");
                std::process::exit(1);
            }
        }
    }

    log::info!("démarrage: {}", reglages.titre);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(reglages.titre.as_str())
            .with_inner_size(reglages.taille_fenetre)
            .with_min_inner_size(reglages.taille_min),
        ..Default::default()
    };

    let titre = reglages.titre.clone();
    eframe::run_native(
        &titre,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::avec_reglages(&reglages)))),
    )
}

/// Calcul unique : arguments concaténés (sans séparateur), résultat formaté.
fn calcul_unique(args: &[String]) -> Result<String, noyau::ErreurCalcul> {
    noyau::calculer(&args.concat()).map(noyau::format_nombre)
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, Reglages};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        // Déjà installé si la page recharge le module : on ignore
        let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

        let reglages = Reglages::default();

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;
        d.set_title(&reglages.titre);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        log::info!("démarrage web: {}", reglages.titre);

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |_cc| Ok(Box::new(AppCalc::avec_reglages(&reglages)))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
