// ============================================================================
// ROUTER - Tabla mínima de rutas de la aplicación
// ============================================================================

/// Rutas conocidas por la app
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    Login,
    AddBanquet,
    BanquetDetails(String),
    NotFound(String),
}

impl Route {
    /// Parsear un pathname del navegador
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["vendorlogin"] | ["login"] => Route::Login,
            ["vendor", "add-banquet"] => Route::AddBanquet,
            ["banquet", id] => Route::BanquetDetails((*id).to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Pathname canónico de la ruta
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/vendorlogin".to_string(),
            Route::AddBanquet => "/vendor/add-banquet".to_string(),
            Route::BanquetDetails(id) => format!("/banquet/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// ¿Hace falta sesión para ver esta ruta?
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::AddBanquet | Route::BanquetDetails(_))
    }
}
