//! Domain-owned model of the carrier's raw tracking payload.
//!
//! The carrier publishes no formal schema and omits fields freely, so every
//! field that may be absent is modelled as an explicit `Option` and checked
//! before use. Adapters decode the wire body straight into these types; the
//! normaliser consumes them without touching the transport layer.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Timestamp layout used by the carrier for event creation times. The value
/// carries no zone designator and is kept as a naive local timestamp.
pub const CARRIER_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Top-level tracking response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CarrierResponse {
    /// Objects described by the response; one per requested code.
    #[serde(default, rename = "objetos")]
    pub objects: Vec<CarrierObject>,
}

/// One tracked object as reported by the carrier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CarrierObject {
    /// Echoed shipment code; unused downstream (the input code is kept verbatim).
    #[serde(rename = "codObjeto")]
    pub code: Option<String>,
    /// Postal-service classification; absent for unidentified objects.
    #[serde(rename = "tipoPostal")]
    pub postal_type: Option<CarrierPostalType>,
    /// Explanatory message; presence marks the lookup as unsuccessful.
    #[serde(rename = "mensagem")]
    pub message: Option<String>,
    /// Handling history, newest first; absent when the code is unknown.
    #[serde(rename = "eventos")]
    pub events: Option<Vec<CarrierEvent>>,
}

/// Carrier postal-service classification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CarrierPostalType {
    /// Category label, e.g. a service-tier code.
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    /// Human-readable description of the service.
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

/// One recorded milestone in the handling history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CarrierEvent {
    /// Carrier-internal event code.
    #[serde(rename = "codigo")]
    pub code: Option<String>,
    /// Status text in the carrier's own wording.
    #[serde(rename = "descricao")]
    pub description: String,
    /// When the event was recorded, in the carrier's local clock.
    #[serde(rename = "dtHrCriado", deserialize_with = "deserialize_carrier_timestamp")]
    pub created_at: NaiveDateTime,
    /// Facility that recorded the event.
    #[serde(rename = "unidade")]
    pub unit: CarrierUnit,
    /// Routing-destination facility, when the carrier reports one.
    #[serde(rename = "unidadeDestino")]
    pub destination_unit: Option<CarrierUnit>,
}

/// A carrier facility: post office, distribution centre, or country-level
/// placeholder for international legs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CarrierUnit {
    /// Street-level address; country placeholders omit it.
    #[serde(rename = "endereco")]
    pub address: Option<CarrierAddress>,
    /// Facility name; populated for country placeholders.
    #[serde(rename = "nome")]
    pub name: Option<String>,
    /// Declared facility type, e.g. `Unidade` or the country marker `País`.
    #[serde(rename = "tipo")]
    pub kind: String,
}

/// Address block attached to domestic facilities.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CarrierAddress {
    /// City the facility sits in.
    #[serde(rename = "cidade")]
    pub city: Option<String>,
    /// Two-letter state code.
    #[serde(rename = "uf")]
    pub state: Option<String>,
}

fn deserialize_carrier_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, CARRIER_TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    //! Decode coverage for the loose carrier schema.

    use super::*;

    #[test]
    fn decodes_full_event_payload() {
        let body = r#"{
            "objetos": [
                {
                    "codObjeto": "AB123456789CD",
                    "tipoPostal": { "categoria": "SEDEX", "descricao": "etiqueta logica sedex" },
                    "eventos": [
                        {
                            "codigo": "BDE",
                            "descricao": "Objeto entregue ao destinatário",
                            "dtHrCriado": "2024-03-17T14:05:09",
                            "unidade": {
                                "endereco": { "cidade": "sao paulo", "uf": "SP" },
                                "nome": "CDD Vila Mariana",
                                "tipo": "Unidade de Distribuição"
                            }
                        }
                    ]
                }
            ]
        }"#;

        let response: CarrierResponse = serde_json::from_str(body).expect("payload decodes");
        let object = response.objects.first().expect("one object");
        assert!(object.message.is_none());
        let events = object.events.as_ref().expect("events present");
        let event = events.first().expect("one event");
        assert_eq!(event.description, "Objeto entregue ao destinatário");
        assert_eq!(
            event.created_at,
            NaiveDateTime::parse_from_str("2024-03-17T14:05:09", CARRIER_TIMESTAMP_FORMAT)
                .expect("fixture timestamp"),
        );
        assert_eq!(event.unit.kind, "Unidade de Distribuição");
    }

    #[test]
    fn decodes_message_only_payload() {
        let body = r#"{
            "objetos": [
                { "codObjeto": "AB123456789CD", "mensagem": "Objeto não encontrado" }
            ]
        }"#;

        let response: CarrierResponse = serde_json::from_str(body).expect("payload decodes");
        let object = response.objects.first().expect("one object");
        assert_eq!(object.message.as_deref(), Some("Objeto não encontrado"));
        assert!(object.events.is_none());
        assert!(object.postal_type.is_none());
    }

    #[test]
    fn rejects_malformed_event_timestamp() {
        let body = r#"{
            "objetos": [
                {
                    "eventos": [
                        {
                            "descricao": "Objeto postado",
                            "dtHrCriado": "17/03/2024 14:05",
                            "unidade": { "tipo": "Agência dos Correios" }
                        }
                    ]
                }
            ]
        }"#;

        let decoded = serde_json::from_str::<CarrierResponse>(body);
        assert!(decoded.is_err(), "locale-formatted timestamps must not decode");
    }

    #[test]
    fn tolerates_missing_objects_collection() {
        let response: CarrierResponse = serde_json::from_str("{}").expect("payload decodes");
        assert!(response.objects.is_empty());
    }
}
