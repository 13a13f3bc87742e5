use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Campos del formulario de alta de banquete (nombres tal como viajan al backend)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum BanquetField {
    PropertyName,
    ParkingCapacity,
    CateringPolicy,
    DecorPolicy,
    DjPolicy,
    BanquetType,
    FixedCapacity,
    MaxCapacity,
    PricePerRoom,
    Space,
    VegPrice,
    NonvegPrice,
    State,
    City,
    Pincode,
    Address,
    CoverPhoto,
    AdditionalPhotos,
}

impl BanquetField {
    pub const ALL: [BanquetField; 18] = [
        BanquetField::PropertyName,
        BanquetField::ParkingCapacity,
        BanquetField::CateringPolicy,
        BanquetField::DecorPolicy,
        BanquetField::DjPolicy,
        BanquetField::BanquetType,
        BanquetField::FixedCapacity,
        BanquetField::MaxCapacity,
        BanquetField::PricePerRoom,
        BanquetField::Space,
        BanquetField::VegPrice,
        BanquetField::NonvegPrice,
        BanquetField::State,
        BanquetField::City,
        BanquetField::Pincode,
        BanquetField::Address,
        BanquetField::CoverPhoto,
        BanquetField::AdditionalPhotos,
    ];

    /// Nombre del campo en el payload multipart y en el atributo `name` del input
    pub fn name(&self) -> &'static str {
        match self {
            BanquetField::PropertyName => "property_name",
            BanquetField::ParkingCapacity => "parking_capacity",
            BanquetField::CateringPolicy => "catering_policy",
            BanquetField::DecorPolicy => "decor_policy",
            BanquetField::DjPolicy => "dj_policy",
            BanquetField::BanquetType => "banquet_type",
            BanquetField::FixedCapacity => "fixed_capacity",
            BanquetField::MaxCapacity => "max_capacity",
            BanquetField::PricePerRoom => "price_per_room",
            BanquetField::Space => "space",
            BanquetField::VegPrice => "veg_price",
            BanquetField::NonvegPrice => "nonveg_price",
            BanquetField::State => "state",
            BanquetField::City => "city",
            BanquetField::Pincode => "pincode",
            BanquetField::Address => "address",
            BanquetField::CoverPhoto => "cover_photo",
            BanquetField::AdditionalPhotos => "additional_photos",
        }
    }

    /// Nombre legible usado en los mensajes de campo obligatorio
    pub fn readable_name(&self) -> String {
        self.name().replace('_', " ")
    }
}

/// Fichero elegido por el usuario, ya leído en memoria
#[derive(Clone, PartialEq, Debug)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Borrador de banquete en edición
#[derive(Clone, Default, PartialEq, Debug)]
pub struct BanquetDraft {
    pub property_name: String,
    pub parking_capacity: String,
    pub catering_policy: String,
    pub decor_policy: String,
    pub dj_policy: String,
    pub banquet_type: String,
    pub fixed_capacity: String,
    pub max_capacity: String,
    pub price_per_room: String,
    pub space: String,
    pub veg_price: String,
    pub nonveg_price: String,
    pub state: String,
    pub city: String,
    pub pincode: String,
    pub address: String,
    pub cover_photo: Option<Attachment>,
    pub additional_photos: Vec<Attachment>,
}

impl BanquetDraft {
    /// Valor de un campo de texto (None para los campos de fotos)
    pub fn text(&self, field: BanquetField) -> Option<&str> {
        let value = match field {
            BanquetField::PropertyName => &self.property_name,
            BanquetField::ParkingCapacity => &self.parking_capacity,
            BanquetField::CateringPolicy => &self.catering_policy,
            BanquetField::DecorPolicy => &self.decor_policy,
            BanquetField::DjPolicy => &self.dj_policy,
            BanquetField::BanquetType => &self.banquet_type,
            BanquetField::FixedCapacity => &self.fixed_capacity,
            BanquetField::MaxCapacity => &self.max_capacity,
            BanquetField::PricePerRoom => &self.price_per_room,
            BanquetField::Space => &self.space,
            BanquetField::VegPrice => &self.veg_price,
            BanquetField::NonvegPrice => &self.nonveg_price,
            BanquetField::State => &self.state,
            BanquetField::City => &self.city,
            BanquetField::Pincode => &self.pincode,
            BanquetField::Address => &self.address,
            BanquetField::CoverPhoto | BanquetField::AdditionalPhotos => return None,
        };
        Some(value.as_str())
    }

    fn text_mut(&mut self, field: BanquetField) -> Option<&mut String> {
        let value = match field {
            BanquetField::PropertyName => &mut self.property_name,
            BanquetField::ParkingCapacity => &mut self.parking_capacity,
            BanquetField::CateringPolicy => &mut self.catering_policy,
            BanquetField::DecorPolicy => &mut self.decor_policy,
            BanquetField::DjPolicy => &mut self.dj_policy,
            BanquetField::BanquetType => &mut self.banquet_type,
            BanquetField::FixedCapacity => &mut self.fixed_capacity,
            BanquetField::MaxCapacity => &mut self.max_capacity,
            BanquetField::PricePerRoom => &mut self.price_per_room,
            BanquetField::Space => &mut self.space,
            BanquetField::VegPrice => &mut self.veg_price,
            BanquetField::NonvegPrice => &mut self.nonveg_price,
            BanquetField::State => &mut self.state,
            BanquetField::City => &mut self.city,
            BanquetField::Pincode => &mut self.pincode,
            BanquetField::Address => &mut self.address,
            BanquetField::CoverPhoto | BanquetField::AdditionalPhotos => return None,
        };
        Some(value)
    }

    /// Establecer un campo de texto. Devuelve false para los campos de fotos.
    pub fn set_text(&mut self, field: BanquetField, value: impl Into<String>) -> bool {
        match self.text_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// ¿Tiene valor el campo? (texto no vacío, foto presente, lista no vacía)
    pub fn is_present(&self, field: BanquetField) -> bool {
        match field {
            BanquetField::CoverPhoto => self.cover_photo.is_some(),
            BanquetField::AdditionalPhotos => !self.additional_photos.is_empty(),
            _ => self.text(field).map(|v| !v.is_empty()).unwrap_or(false),
        }
    }
}

/// Payload multipart listo para enviar a `/vendor/add-banquet/{vendorId}`
#[derive(Clone, PartialEq, Debug)]
pub struct BanquetPayload {
    /// Campos escalares en el orden del formulario
    pub fields: Vec<(&'static str, String)>,
    pub cover_photo: Attachment,
    pub additional_photos: Vec<Attachment>,
}

impl BanquetPayload {
    /// Construir el payload a partir de un borrador. Falla si falta la portada.
    pub fn from_draft(draft: &BanquetDraft) -> Result<Self, String> {
        let cover_photo = draft
            .cover_photo
            .clone()
            .ok_or_else(|| "Cover photo missing from draft".to_string())?;
        let fields = BanquetField::ALL
            .iter()
            .filter_map(|field| draft.text(*field).map(|v| (field.name(), v.to_string())))
            .collect();
        Ok(Self {
            fields,
            cover_photo,
            additional_photos: draft.additional_photos.clone(),
        })
    }

    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Registro de banquete devuelto por el servidor.
/// Todos los campos se guardan como JSON libre: un campo con forma
/// inesperada se muestra vacío sin invalidar el resto del registro.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct Banquet {
    #[serde(rename = "_id", default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub property_name: Option<Value>,
    #[serde(default)]
    pub cover_photo: Option<Value>,
    #[serde(default)]
    pub additional_photos: Option<Value>,
    #[serde(default)]
    pub banquet_type: Option<Value>,
    #[serde(default)]
    pub veg_price: Option<Value>,
    #[serde(default)]
    pub nonveg_price: Option<Value>,
    #[serde(default)]
    pub price_per_room: Option<Value>,
    #[serde(default)]
    pub fixed_capacity: Option<Value>,
    #[serde(default)]
    pub max_capacity: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub city: Option<Value>,
    #[serde(default)]
    pub state: Option<Value>,
}

impl Banquet {
    /// Valor numérico o texto del servidor como cadena para mostrar
    pub fn display_value(value: &Option<Value>) -> Option<String> {
        match value {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<String> {
        Self::display_value(&self.id)
    }

    pub fn property_name(&self) -> Option<String> {
        Self::display_value(&self.property_name)
    }

    pub fn cover_photo(&self) -> Option<String> {
        Self::display_value(&self.cover_photo)
    }

    pub fn banquet_type(&self) -> Option<String> {
        Self::display_value(&self.banquet_type)
    }

    pub fn address(&self) -> Option<String> {
        Self::display_value(&self.address)
    }

    /// Rutas de la galería; entradas que no son texto se ignoran
    pub fn photo_paths(&self) -> Vec<String> {
        match &self.additional_photos {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str())
                .filter(|path| !path.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// "Ciudad, Estado" con lo que haya disponible
    pub fn location_line(&self) -> Option<String> {
        let parts: Vec<String> = [Self::display_value(&self.city), Self::display_value(&self.state)]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct GetBanquetResponse {
    pub success: bool,
    #[serde(default)]
    pub banquet: Option<Banquet>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AddBanquetResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_unique() {
        let names: std::collections::HashSet<_> = BanquetField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), BanquetField::ALL.len());
    }

    #[test]
    fn test_readable_name_replaces_every_underscore() {
        assert_eq!(BanquetField::PricePerRoom.readable_name(), "price per room");
    }

    #[test]
    fn test_set_text_rejects_photo_fields() {
        let mut draft = BanquetDraft::default();
        assert!(draft.set_text(BanquetField::City, "Pune"));
        assert!(!draft.set_text(BanquetField::CoverPhoto, "x"));
        assert_eq!(draft.city, "Pune");
    }

    #[test]
    fn test_payload_keeps_every_scalar_field() {
        let mut draft = BanquetDraft::default();
        draft.property_name = "Royal Hall".to_string();
        draft.cover_photo = Some(Attachment::new("c.jpg", "image/jpeg", vec![1]));
        let payload = BanquetPayload::from_draft(&draft).unwrap();
        assert_eq!(payload.fields.len(), 16);
        assert_eq!(payload.field("property_name"), Some("Royal Hall"));
        assert_eq!(payload.field("cover_photo"), None);
    }

    #[test]
    fn test_banquet_tolerates_partial_records() {
        let banquet: Banquet = serde_json::from_str(r#"{"_id":"b1","veg_price":1200}"#).unwrap();
        assert_eq!(banquet.id().as_deref(), Some("b1"));
        assert_eq!(banquet.property_name(), None);
        assert_eq!(Banquet::display_value(&banquet.veg_price).as_deref(), Some("1200"));

        let empty: Banquet = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Banquet::default());
        assert_eq!(empty.location_line(), None);
    }

    #[test]
    fn test_odd_field_shape_keeps_the_rest_of_the_record() {
        let body = r#"{"success":true,"banquet":{"_id":"b1","property_name":"Royal","cover_photo":"c.jpg","additional_photos":[{"url":"a.jpg"},"b.jpg"],"city":{"name":"Pune"},"state":"Maharashtra"}}"#;
        let response: GetBanquetResponse = serde_json::from_str(body).unwrap();
        let banquet = response.banquet.unwrap();
        assert_eq!(banquet.property_name().as_deref(), Some("Royal"));
        assert_eq!(banquet.cover_photo().as_deref(), Some("c.jpg"));
        assert_eq!(banquet.photo_paths(), vec!["b.jpg".to_string()]);
        assert_eq!(banquet.location_line().as_deref(), Some("Maharashtra"));
    }

    #[test]
    fn test_photo_paths_when_not_a_list() {
        let banquet: Banquet = serde_json::from_str(r#"{"additional_photos":"a.jpg"}"#).unwrap();
        assert!(banquet.photo_paths().is_empty());
    }
}
