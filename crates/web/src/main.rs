// =============================================================================
// Squad Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into every page.
// =============================================================================

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = squad_web::boot() {
        log::error!("Failed to start Squad site: {:?}", e);
    }
}
