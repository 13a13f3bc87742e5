// ============================================================================
// BANQUET FORM VIEWMODEL - Estado + lógica del formulario "Add Banquet"
// ============================================================================
// Fases: Editing (inicial) -> Submitting (transitoria) -> Editing
// La vista solo traduce eventos del DOM a llamadas de este módulo
// ============================================================================

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ops::Range;
use std::rc::Rc;
use crate::models::{Attachment, BanquetDraft, BanquetField, BanquetPayload, LocationOption};
use crate::services::{geography, VendorApi};
use crate::state::SessionState;
use crate::utils::validators::{self, FieldErrors};

const DEFAULT_SUCCESS_MESSAGE: &str = "Banquet added successfully";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormPhase {
    Editing,
    Submitting,
}

/// Motivo por el que no se llega a enviar nada
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitBlocked {
    Invalid,
    AlreadySubmitting,
}

/// Resultado de un intento de envío
#[derive(Clone, PartialEq, Debug)]
pub enum SubmitOutcome {
    /// Validación fallida, errores de campo actualizados, sin petición
    Invalid,
    /// Ya había un envío en curso
    AlreadySubmitting,
    /// Banquete creado: mostrar mensaje y volver atrás
    Created { message: String },
    /// Error de red o `success: false`; el borrador se conserva
    Failed(String),
}

/// Estado del formulario (sin IO)
pub struct BanquetForm {
    draft: BanquetDraft,
    errors: FieldErrors,
    states: Vec<LocationOption>,
    cities: Vec<String>,
    phase: FormPhase,
    // Turnos de lectura de ficheros: los resultados se aplican en orden de elección
    next_read: u64,
    latest_cover_read: u64,
    pending_additional: BTreeMap<u64, Option<Vec<Attachment>>>,
}

impl BanquetForm {
    /// Formulario vacío con la lista de estados cargada
    pub fn new() -> Self {
        Self::with_states(geography::states())
    }

    pub fn with_states(states: Vec<LocationOption>) -> Self {
        Self {
            draft: BanquetDraft::default(),
            errors: FieldErrors::new(),
            states,
            cities: Vec::new(),
            phase: FormPhase::Editing,
            next_read: 0,
            latest_cover_read: 0,
            pending_additional: BTreeMap::new(),
        }
    }

    pub fn draft(&self) -> &BanquetDraft {
        &self.draft
    }

    pub fn error(&self, field: BanquetField) -> &str {
        self.errors.get(field)
    }

    pub fn states(&self) -> &[LocationOption] {
        &self.states
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// El selector de ciudad solo se habilita con un estado elegido
    pub fn is_city_enabled(&self) -> bool {
        !self.draft.state.is_empty()
    }

    /// Edición de un campo de texto: actualiza el valor y SOLO su error
    pub fn edit_field(&mut self, field: BanquetField, value: &str) -> &str {
        if field == BanquetField::State {
            self.select_state(value);
            return self.errors.get(field);
        }
        if !self.draft.set_text(field, value) {
            log::warn!("⚠️ [BANQUET] {} no es un campo de texto", field.name());
            return self.errors.get(field);
        }
        self.errors.set(field, validators::validate(field, value));
        self.errors.get(field)
    }

    /// Selección de estado: vacía la ciudad y recarga la lista de ciudades
    pub fn select_state(&mut self, state_name: &str) {
        self.draft.state = state_name.to_string();
        self.draft.city.clear();
        self.errors.clear(BanquetField::State);

        self.cities = match self.states.iter().find(|s| s.name == state_name) {
            Some(state) => geography::cities_of_state(&state.iso_code),
            None => {
                if !state_name.is_empty() {
                    log::warn!("⚠️ [BANQUET] Estado desconocido: {}", state_name);
                }
                Vec::new()
            }
        };
        log::debug!("🗺️ [BANQUET] {} ciudades para {}", self.cities.len(), state_name);
    }

    /// Portada: una sola foto, reemplaza la anterior
    pub fn set_cover_photo(&mut self, photo: Attachment) -> Option<Attachment> {
        self.draft.cover_photo.replace(photo)
    }

    /// Fotos adicionales: se añaden al final, nunca reemplazan
    pub fn add_additional_photos(&mut self, photos: Vec<Attachment>) {
        self.draft.additional_photos.extend(photos);
    }

    pub fn remove_cover_photo(&mut self) -> Option<Attachment> {
        self.draft.cover_photo.take()
    }

    /// Turno para una selección de portada (antes de leer los ficheros)
    pub fn reserve_cover_read(&mut self) -> u64 {
        self.next_read += 1;
        self.latest_cover_read = self.next_read;
        self.next_read
    }

    /// Aplicar una portada leída. Solo gana la última selección: una lectura
    /// más antigua que termine después se descarta. Devuelve true si se aplicó.
    pub fn complete_cover_read(&mut self, ticket: u64, photo: Option<Attachment>) -> bool {
        if ticket != self.latest_cover_read {
            log::debug!("🔕 [BANQUET] Portada del turno {} obsoleta, se descarta", ticket);
            return false;
        }
        match photo {
            Some(photo) => {
                self.set_cover_photo(photo);
                true
            }
            None => false,
        }
    }

    /// Turno para una selección de fotos adicionales
    pub fn reserve_additional_read(&mut self) -> u64 {
        self.next_read += 1;
        self.pending_additional.insert(self.next_read, None);
        self.next_read
    }

    /// Entregar las fotos leídas de un turno. Se añaden al borrador solo cuando
    /// todos los turnos anteriores han terminado, respetando el orden de
    /// elección. Devuelve los índices añadidos en esta llamada.
    pub fn complete_additional_read(&mut self, ticket: u64, photos: Vec<Attachment>) -> Range<usize> {
        let start = self.draft.additional_photos.len();
        match self.pending_additional.get_mut(&ticket) {
            Some(slot) => *slot = Some(photos),
            None => {
                log::warn!("⚠️ [BANQUET] Turno de fotos desconocido: {}", ticket);
                return start..start;
            }
        }
        while let Some(entry) = self.pending_additional.first_entry() {
            if entry.get().is_none() {
                break;
            }
            if let Some(photos) = entry.remove() {
                self.draft.additional_photos.extend(photos);
            }
        }
        start..self.draft.additional_photos.len()
    }

    /// Quitar la foto adicional `index` conservando el orden del resto
    pub fn remove_additional_photo(&mut self, index: usize) -> Option<Attachment> {
        if index < self.draft.additional_photos.len() {
            Some(self.draft.additional_photos.remove(index))
        } else {
            log::warn!("⚠️ [BANQUET] Índice de foto fuera de rango: {}", index);
            None
        }
    }

    /// Validar todo y pasar a Submitting. Con errores se queda en Editing.
    pub fn begin_submit(&mut self) -> Result<BanquetPayload, SubmitBlocked> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        self.errors = validators::validate_draft(&self.draft);
        if !self.errors.is_empty() {
            log::info!("📝 [BANQUET] Validación fallida en {} campos", self.errors.len());
            return Err(SubmitBlocked::Invalid);
        }
        let payload = BanquetPayload::from_draft(&self.draft).map_err(|e| {
            log::error!("❌ [BANQUET] {}", e);
            SubmitBlocked::Invalid
        })?;
        self.phase = FormPhase::Submitting;
        Ok(payload)
    }

    /// Fin del envío: siempre vuelve a Editing (el borrador no se toca)
    pub fn finish_submit(&mut self) {
        self.phase = FormPhase::Editing;
    }
}

impl Default for BanquetForm {
    fn default() -> Self {
        Self::new()
    }
}

/// ViewModel del formulario - orquesta validación y envío
pub struct BanquetFormViewModel<A: VendorApi> {
    api: A,
    session: SessionState,
    form: Rc<RefCell<BanquetForm>>,
}

impl<A: VendorApi> BanquetFormViewModel<A> {
    pub fn new(api: A, session: SessionState, form: Rc<RefCell<BanquetForm>>) -> Self {
        Self { api, session, form }
    }

    pub fn form(&self) -> Rc<RefCell<BanquetForm>> {
        self.form.clone()
    }

    /// Enviar el formulario. Ningún borrow del formulario cruza el `.await`.
    pub async fn submit(&self) -> SubmitOutcome {
        let started = self.form.borrow_mut().begin_submit();
        let payload = match started {
            Ok(payload) => payload,
            Err(SubmitBlocked::Invalid) => return SubmitOutcome::Invalid,
            Err(SubmitBlocked::AlreadySubmitting) => {
                log::warn!("⚠️ [BANQUET] Envío ya en curso, se ignora");
                return SubmitOutcome::AlreadySubmitting;
            }
        };

        let (vendor_id, token) = match self.session.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                log::error!("❌ [BANQUET] Sin credenciales para crear banquete: {}", e);
                self.form.borrow_mut().finish_submit();
                return SubmitOutcome::Failed(e);
            }
        };

        let result = self.api.add_banquet(&vendor_id, &token, &payload).await;
        self.form.borrow_mut().finish_submit();

        match result {
            Ok(response) if response.success => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                log::info!("✅ [BANQUET] Banquete creado: {}", message);
                SubmitOutcome::Created { message }
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Banquet creation rejected".to_string());
                log::error!("❌ [BANQUET] El servidor rechazó el banquete: {}", message);
                SubmitOutcome::Failed(message)
            }
            Err(e) => {
                log::error!("❌ [BANQUET] Error creando banquete: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
