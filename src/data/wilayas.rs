// src/data/wilayas.rs

use crate::models::region::Wilaya;

fn w(id: i64, name: &str, name_ar: &str, domicile_price: i64, office_price: i64) -> Wilaya {
    Wilaya {
        id,
        name: name.to_string(),
        name_ar: Some(name_ar.to_string()),
        domicile_price,
        office_price,
    }
}

/// Tabela das 58 wilayas com as tarifas de entrega em DZD. Editável pelo
/// admin em princípio, mas carregada uma única vez por processo; o checkout
/// nunca a muta.
pub fn wilayas() -> Vec<Wilaya> {
    vec![
        w(1, "Adrar", "أدرار", 1400, 900),
        w(2, "Chlef", "الشلف", 750, 450),
        w(3, "Laghouat", "الأغواط", 950, 600),
        w(4, "Oum El Bouaghi", "أم البواقي", 700, 450),
        w(5, "Batna", "باتنة", 700, 450),
        w(6, "Béjaïa", "بجاية", 700, 450),
        w(7, "Biskra", "بسكرة", 900, 550),
        w(8, "Béchar", "بشار", 1100, 650),
        w(9, "Blida", "البليدة", 500, 350),
        w(10, "Bouira", "البويرة", 650, 400),
        w(11, "Tamanrasset", "تمنراست", 1600, 1050),
        w(12, "Tébessa", "تبسة", 800, 480),
        w(13, "Tlemcen", "تلمسان", 750, 450),
        w(14, "Tiaret", "تيارت", 800, 480),
        w(15, "Tizi Ouzou", "تيزي وزو", 650, 400),
        w(16, "Alger", "الجزائر", 450, 300),
        w(17, "Djelfa", "الجلفة", 950, 600),
        w(18, "Jijel", "جيجل", 700, 450),
        w(19, "Sétif", "سطيف", 700, 450),
        w(20, "Saïda", "سعيدة", 800, 480),
        w(21, "Skikda", "سكيكدة", 700, 450),
        w(22, "Sidi Bel Abbès", "سيدي بلعباس", 750, 450),
        w(23, "Annaba", "عنابة", 700, 450),
        w(24, "Guelma", "قالمة", 700, 450),
        w(25, "Constantine", "قسنطينة", 700, 450),
        w(26, "Médéa", "المدية", 650, 400),
        w(27, "Mostaganem", "مستغانم", 750, 450),
        w(28, "M'Sila", "المسيلة", 800, 480),
        w(29, "Mascara", "معسكر", 750, 450),
        w(30, "Ouargla", "ورقلة", 1000, 650),
        w(31, "Oran", "وهران", 650, 400),
        w(32, "El Bayadh", "البيض", 1000, 650),
        w(33, "Illizi", "إليزي", 1600, 1050),
        w(34, "Bordj Bou Arréridj", "برج بوعريريج", 700, 450),
        w(35, "Boumerdès", "بومرداس", 500, 350),
        w(36, "El Tarf", "الطارف", 750, 480),
        w(37, "Tindouf", "تندوف", 1600, 1050),
        w(38, "Tissemsilt", "تيسمسيلت", 800, 480),
        w(39, "El Oued", "الوادي", 950, 600),
        w(40, "Khenchela", "خنشلة", 750, 480),
        w(41, "Souk Ahras", "سوق أهراس", 750, 480),
        w(42, "Tipaza", "تيبازة", 500, 350),
        w(43, "Mila", "ميلة", 700, 450),
        w(44, "Aïn Defla", "عين الدفلى", 700, 450),
        w(45, "Naâma", "النعامة", 1000, 650),
        w(46, "Aïn Témouchent", "عين تموشنت", 750, 450),
        w(47, "Ghardaïa", "غرداية", 950, 600),
        w(48, "Relizane", "غليزان", 750, 450),
        w(49, "Timimoun", "تيميمون", 1500, 1000),
        w(50, "Bordj Badji Mokhtar", "برج باجي مختار", 1600, 1050),
        w(51, "Ouled Djellal", "أولاد جلال", 950, 600),
        w(52, "Béni Abbès", "بني عباس", 1400, 900),
        w(53, "In Salah", "عين صالح", 1600, 1050),
        w(54, "In Guezzam", "عين قزام", 1600, 1050),
        w(55, "Touggourt", "تقرت", 950, 600),
        w(56, "Djanet", "جانت", 1600, 1050),
        w(57, "El M'Ghair", "المغير", 950, 600),
        w(58, "El Menia", "المنيعة", 1000, 650),
    ]
}
