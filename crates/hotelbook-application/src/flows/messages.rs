//! User-facing texts not owned by a validation error.

pub const LOGIN_OK: &str = "¡Login exitoso!";
pub const LOGIN_FAILED: &str = "Error en login. Verifica tus credenciales.";
pub const REGISTER_OK: &str = "¡Registro exitoso! Ahora puedes iniciar sesión.";
pub const REGISTER_FAILED: &str = "Error en registro. El email puede ya estar registrado.";

pub const SEARCH_FAILED: &str = "Error buscando hoteles. Por favor, intenta de nuevo.";
pub const DETAIL_FAILED: &str = "Error cargando detalles del hotel";
pub const BOOKING_FAILED: &str = "Error creando la reserva. Por favor, intenta de nuevo.";

pub const DEFAULT_GREETING_NAME: &str = "Usuario";
pub const NOT_AVAILABLE: &str = "No disponible";

pub const ACCESS_DENIED: &str =
    "Acceso denegado. Solo administradores pueden acceder a esta página.";
pub const HOTELS_LOAD_FAILED: &str = "Error cargando hoteles";
pub const HOTEL_CREATED: &str = "Hotel creado exitosamente";
pub const HOTEL_CREATE_FAILED: &str =
    "Error creando hotel. Revisa que todos los campos estén completos.";
pub const HOTEL_UPDATED: &str = "Hotel actualizado exitosamente";
pub const HOTEL_UPDATE_FAILED: &str = "Error actualizando hotel";
pub const HOTEL_DELETED: &str = "Hotel eliminado exitosamente";
pub const HOTEL_DELETE_FAILED: &str = "Error eliminando hotel";
pub const THUMBNAIL_UPLOADED: &str = "Imagen principal subida exitosamente";
pub const THUMBNAIL_UPLOAD_FAILED: &str = "Error subiendo imagen principal";
pub const IMAGES_UPLOAD_FAILED: &str = "Error subiendo imágenes";

pub fn images_uploaded(count: usize) -> String {
    format!("{count} imágenes subidas exitosamente")
}
