//! Normalisation of one raw carrier payload into a tracking record.
//!
//! Pure and total: every malformed or unsuccessful payload maps to a
//! failure-shaped [`Tracking`], never a panic or error.

use crate::domain::category::normalize_category;
use crate::domain::location;
use crate::domain::payload::{CarrierEvent, CarrierResponse};
use crate::domain::tracking::{Tracking, TrackingEvent, TrackingFault, TrackingRecord};

/// Fixed phrase the carrier uses in the newest event of a delivered object.
/// Matched as a substring; the carrier exposes no stable status taxonomy.
pub const DELIVERED_PHRASE: &str = "Objeto entregue";

/// Normalise the carrier payload for `code` into a tracking record.
///
/// An explicit carrier message, a missing events collection, or an empty one
/// all yield the [`TrackingFault::NotFound`] shape; a found record always
/// carries at least one event. Events arrive newest-first, so the record's
/// posting timestamp is the last event's and its update timestamp the first's.
pub fn normalize(response: CarrierResponse, code: &str) -> Tracking {
    let Some(object) = response.objects.into_iter().next() else {
        return Tracking::failed(code, TrackingFault::NotFound);
    };
    if object.message.is_some() {
        return Tracking::failed(code, TrackingFault::NotFound);
    }
    let Some(raw_events) = object.events else {
        return Tracking::failed(code, TrackingFault::NotFound);
    };

    let events: Vec<TrackingEvent> = raw_events.into_iter().map(into_tracking_event).collect();
    let (Some(newest), Some(oldest)) = (events.first(), events.last()) else {
        return Tracking::failed(code, TrackingFault::NotFound);
    };

    let is_delivered = newest.status.contains(DELIVERED_PHRASE);
    let posted_at = oldest.tracked_at;
    let updated_at = newest.tracked_at;

    Tracking::found(
        code,
        TrackingRecord {
            category: normalize_category(object.postal_type.as_ref()),
            is_delivered,
            posted_at,
            updated_at,
            events,
        },
    )
}

fn into_tracking_event(event: CarrierEvent) -> TrackingEvent {
    let resolved = location::resolve(&event.unit);
    let destination = event
        .destination_unit
        .as_ref()
        .map(|unit| location::resolve(unit).origin);

    TrackingEvent {
        locality: resolved.locality,
        status: event.description,
        origin: resolved.origin,
        destination,
        tracked_at: event.created_at,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for payload normalisation.

    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::payload::{
        CARRIER_TIMESTAMP_FORMAT, CarrierAddress, CarrierObject, CarrierPostalType, CarrierUnit,
    };

    const CODE: &str = "AB123456789CD";

    fn timestamp(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, CARRIER_TIMESTAMP_FORMAT).expect("fixture timestamp")
    }

    fn domestic_unit(city: &str, kind: &str) -> CarrierUnit {
        CarrierUnit {
            address: Some(CarrierAddress {
                city: Some(city.to_owned()),
                state: Some("SP".to_owned()),
            }),
            name: None,
            kind: kind.to_owned(),
        }
    }

    fn event(description: &str, created_at: &str) -> CarrierEvent {
        CarrierEvent {
            code: Some("BDE".to_owned()),
            description: description.to_owned(),
            created_at: timestamp(created_at),
            unit: domestic_unit("sao paulo", "Unidade"),
            destination_unit: None,
        }
    }

    fn response(object: CarrierObject) -> CarrierResponse {
        CarrierResponse {
            objects: vec![object],
        }
    }

    fn object_with_events(events: Vec<CarrierEvent>) -> CarrierObject {
        CarrierObject {
            code: Some(CODE.to_owned()),
            postal_type: Some(CarrierPostalType {
                category: Some("sedex".to_owned()),
                description: Some("encomenda comum".to_owned()),
            }),
            message: None,
            events: Some(events),
        }
    }

    #[test]
    fn explicit_message_yields_not_found_regardless_of_other_fields() {
        let mut object = object_with_events(vec![event("Objeto postado", "2024-03-10T09:00:00")]);
        object.message = Some("Objeto não encontrado na base de dados".to_owned());

        let tracking = normalize(response(object), CODE);

        assert_eq!(tracking.code, CODE);
        assert_eq!(tracking.fault(), Some(TrackingFault::NotFound));
    }

    #[test]
    fn missing_events_collection_yields_not_found() {
        let mut object = object_with_events(Vec::new());
        object.events = None;

        let tracking = normalize(response(object), CODE);

        assert_eq!(tracking.fault(), Some(TrackingFault::NotFound));
    }

    #[test]
    fn empty_events_collection_yields_not_found() {
        let tracking = normalize(response(object_with_events(Vec::new())), CODE);

        assert_eq!(tracking.fault(), Some(TrackingFault::NotFound));
    }

    #[test]
    fn empty_objects_collection_yields_not_found() {
        let tracking = normalize(
            CarrierResponse {
                objects: Vec::new(),
            },
            CODE,
        );

        assert_eq!(tracking.fault(), Some(TrackingFault::NotFound));
    }

    #[test]
    fn posted_and_updated_come_from_last_and_first_events() {
        let tracking = normalize(
            response(object_with_events(vec![
                event("Objeto saiu para entrega", "2024-03-17T14:05:09"),
                event("Objeto em trânsito", "2024-03-12T11:30:00"),
                event("Objeto postado", "2024-03-10T09:00:00"),
            ])),
            CODE,
        );

        let record = tracking.record().expect("found record");
        assert_eq!(record.events.len(), 3);
        assert_eq!(record.updated_at, timestamp("2024-03-17T14:05:09"));
        assert_eq!(record.posted_at, timestamp("2024-03-10T09:00:00"));
        assert!(!record.is_delivered);
    }

    #[test]
    fn delivered_phrase_in_newest_event_marks_delivery() {
        let tracking = normalize(
            response(object_with_events(vec![
                event("Objeto entregue ao destinatário", "2024-03-17T14:05:09"),
                event("Objeto postado", "2024-03-10T09:00:00"),
            ])),
            CODE,
        );

        assert!(tracking.is_delivered());
    }

    #[test]
    fn delivered_phrase_in_older_event_does_not_mark_delivery() {
        let tracking = normalize(
            response(object_with_events(vec![
                event("Objeto devolvido ao remetente", "2024-03-20T10:00:00"),
                event("Objeto entregue ao destinatário", "2024-03-17T14:05:09"),
            ])),
            CODE,
        );

        assert!(!tracking.is_delivered());
    }

    #[test]
    fn destination_unit_resolves_to_its_origin_only() {
        let mut transit = event("Objeto em trânsito", "2024-03-12T11:30:00");
        transit.destination_unit = Some(domestic_unit("curitiba", "Unidade de Tratamento"));

        let tracking = normalize(response(object_with_events(vec![transit])), CODE);

        let record = tracking.record().expect("found record");
        let event = record.events.first().expect("one event");
        assert_eq!(event.locality.as_deref(), Some("Sao Paulo / SP"));
        assert_eq!(event.origin, "Unidade - Sao Paulo / SP");
        assert_eq!(
            event.destination.as_deref(),
            Some("Unidade de Tratamento - Curitiba / SP"),
        );
    }

    #[test]
    fn input_code_is_kept_verbatim() {
        let mut object = object_with_events(vec![event("Objeto postado", "2024-03-10T09:00:00")]);
        object.code = Some("ZZ999999999ZZ".to_owned());

        let tracking = normalize(response(object), CODE);

        assert_eq!(tracking.code, CODE);
    }
}
