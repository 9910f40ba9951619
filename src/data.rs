// src/data.rs

pub mod offices;
pub mod wilayas;

use crate::models::order::DeliveryType;
use crate::models::region::{StopDesk, Wilaya};

/// Faixa reservada para ids de desks sintéticos. Um id acima desta base
/// nunca pertence ao diretório real e não deve ser repassado à
/// transportadora como `stop_desk_id`.
pub const SYNTHETIC_OFFICE_ID_BASE: i64 = 1_000_000;

pub fn is_synthetic_office(id: i64) -> bool {
    id >= SYNTHETIC_OFFICE_ID_BASE
}

/// Dados de referência (wilayas + stop desks), carregados uma vez no boot e
/// somente leitura a partir daí.
#[derive(Debug)]
pub struct ReferenceData {
    wilayas: Vec<Wilaya>,
    stop_desks: Vec<StopDesk>,
}

impl ReferenceData {
    pub fn load() -> Self {
        Self {
            wilayas: wilayas::wilayas(),
            stop_desks: offices::stop_desks(),
        }
    }

    pub fn wilayas(&self) -> &[Wilaya] {
        &self.wilayas
    }

    pub fn wilaya(&self, id: i64) -> Option<&Wilaya> {
        self.wilayas.iter().find(|w| w.id == id)
    }

    pub fn wilaya_by_name(&self, name: &str) -> Option<&Wilaya> {
        self.wilayas
            .iter()
            .find(|w| w.name.eq_ignore_ascii_case(name))
    }

    /// Tarifa configurada para a wilaya; zero quando a wilaya não existe.
    pub fn delivery_fee(&self, wilaya_id: i64, delivery_type: DeliveryType) -> i64 {
        match self.wilaya(wilaya_id) {
            Some(w) => match delivery_type {
                DeliveryType::Domicile => w.domicile_price,
                DeliveryType::Office => w.office_price,
            },
            None => 0,
        }
    }

    /// Desks da wilaya. Uma wilaya sem desk real recebe exatamente um desk
    /// sintético ("estação regional"), para que a seleção de retirada nunca
    /// venha vazia.
    pub fn offices_for(&self, wilaya_id: i64) -> Vec<StopDesk> {
        let found: Vec<StopDesk> = self
            .stop_desks
            .iter()
            .filter(|d| d.wilaya_id == wilaya_id)
            .cloned()
            .collect();
        if !found.is_empty() {
            return found;
        }

        let name = self
            .wilaya(wilaya_id)
            .map(|w| w.name.clone())
            .unwrap_or_else(|| format!("Wilaya {wilaya_id}"));
        vec![StopDesk {
            id: SYNTHETIC_OFFICE_ID_BASE + wilaya_id,
            name: format!("Station {name} Centre"),
            address: format!("Centre-ville, {name}"),
            wilaya_id,
            commune_name: None,
            phone: None,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wilaya_ids_are_unique() {
        let reference = ReferenceData::load();
        let mut ids: Vec<i64> = reference.wilayas().iter().map(|w| w.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), reference.wilayas().len());
    }

    #[test]
    fn every_desk_points_to_a_known_wilaya() {
        let reference = ReferenceData::load();
        for desk in offices::stop_desks() {
            assert!(
                reference.wilaya(desk.wilaya_id).is_some(),
                "desk {} references unknown wilaya {}",
                desk.id,
                desk.wilaya_id
            );
            assert!(!is_synthetic_office(desk.id));
        }
    }

    #[test]
    fn fee_is_zero_for_unknown_wilaya() {
        let reference = ReferenceData::load();
        assert_eq!(reference.delivery_fee(999, DeliveryType::Domicile), 0);
        assert_eq!(reference.delivery_fee(999, DeliveryType::Office), 0);
    }

    #[test]
    fn fee_follows_delivery_type() {
        let reference = ReferenceData::load();
        let alger = reference.wilaya(16).unwrap();
        assert_eq!(
            reference.delivery_fee(16, DeliveryType::Domicile),
            alger.domicile_price
        );
        assert_eq!(
            reference.delivery_fee(16, DeliveryType::Office),
            alger.office_price
        );
    }

    #[test]
    fn officeless_wilaya_gets_one_synthetic_desk() {
        let reference = ReferenceData::load();
        // Tindouf (37) não tem desk no diretório.
        let desks = reference.offices_for(37);
        assert_eq!(desks.len(), 1);
        assert!(is_synthetic_office(desks[0].id));
        assert_eq!(desks[0].id, SYNTHETIC_OFFICE_ID_BASE + 37);
        assert_eq!(desks[0].wilaya_id, 37);
    }

    #[test]
    fn wilaya_with_real_desks_returns_them_all() {
        let reference = ReferenceData::load();
        let desks = reference.offices_for(16);
        assert!(desks.len() > 1);
        assert!(desks.iter().all(|d| !is_synthetic_office(d.id)));
        assert!(desks.iter().all(|d| d.wilaya_id == 16));
    }
}
