/// Claves de localStorage de la sesión
pub const STORAGE_KEY_TOKEN: &str = "budo_token";
pub const STORAGE_KEY_USER: &str = "budo_user";

/// Variante antigua de las claves; solo se limpia, nunca se lee
pub const LEGACY_STORAGE_KEY_TOKEN: &str = "token";
pub const LEGACY_STORAGE_KEY_USER: &str = "usuario";

/// Cabecera de autenticación
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Competidor ficticio que el servidor usa para los "bye"
pub const BYE_COMPETITOR_ID: &str = "BYE";

/// Método de generación de llaves soportado por el servidor
pub const BRACKET_METHOD_SIMPLE: &str = "simples";
