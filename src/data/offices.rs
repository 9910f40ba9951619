// src/data/offices.rs

use crate::models::region::StopDesk;

fn desk(id: i64, name: &str, address: &str, wilaya_id: i64, commune: &str, phone: Option<&str>) -> StopDesk {
    StopDesk {
        id,
        name: name.to_string(),
        address: address.to_string(),
        wilaya_id,
        commune_name: Some(commune.to_string()),
        phone: phone.map(str::to_string),
    }
}

/// Diretório dos stop desks da rede Anderson/EcoTrack. Dado estático de
/// referência; as wilayas sem entrada aqui recebem um desk sintético em
/// tempo de consulta (ver `ReferenceData::offices_for`).
pub fn stop_desks() -> Vec<StopDesk> {
    vec![
        // 01 - Adrar
        desk(101, "Station Adrar", "Adrar", 1, "Adrar", Some("0660709353")),
        // 02 - Chlef
        desk(201, "Station Chlef", "حي بن سونة لاسيتي بجانب مقهى بن يوسف مقابل الدوش", 2, "Chlef", Some("0770511166 / 0670675881")),
        // 03 - Laghouat
        desk(301, "Station Laghouat", "Laghouat", 3, "Laghouat", Some("0770 78 07 18")),
        desk(302, "Station Laghouat New", "Cite bouameur maamourah laghouat", 3, "Laghouat", Some("0770953193")),
        // 04 - Oum El Bouaghi
        desk(401, "Station Aïn M'lila", "Quartier El Hana, route Massas, à côté de l'agence Parcours Voyages", 4, "Ain M'lila", Some("0770531702")),
        desk(402, "Station Ain Fekroune", "Ain Fekroune", 4, "Ain Fekroune", None),
        desk(403, "Station Oum el bouaghi", "حي المستقبل بجانب الولاية ام البواقي", 4, "Oum El Bouaghi", Some("0660877228 / 0660128008")),
        // 05 - Batna
        desk(501, "Station Batna - Cité El Amrani", "cité les frères El Amrani , Batna", 5, "Oued Chaaba", Some("0770531028")),
        desk(502, "Station BATNA Centre", "حي برج الغولة طريق مصنع النسيج بجانب الثانوية الخاصة أجيال المستقبل", 5, "Batna", Some("0770637788 / 0770518901")),
        // 06 - Béjaïa
        desk(601, "Station BEJAIA", "Zone industrielle edimco section 2 bâtiment A", 6, "Bejaia", Some("0560250529 / 0770753564")),
        desk(602, "Station Akbou", "Trémie guendouza av. Mohamed boudiaf akbou 0601", 6, "Akbou", Some("0770807317")),
        // 07 - Biskra
        desk(701, "Station BISKRA", "التعاونية العقارية الإزدهار", 7, "Biskra", Some("0770522149")),
        // 08 - Béchar
        desk(801, "Station Béchar", "حي البدر 600 مسكن", 8, "Bechar", Some("0671559677")),
        // 09 - Blida
        desk(901, "Station BLIDA", "شارع رامول عبد العزيز رقم 17, البليدة", 9, "Blida", Some("0784602779 / 0770967048")),
        desk(902, "Station Blida (Boufarik)", "شارع سي بن يوسف حصة رقم 01 بوفاريك", 9, "Boufarik", Some("0770808317")),
        // 10 - Bouira
        desk(1001, "Station Bouira", "حي 24 مسكن تساهمي عمارة ب قطعة رقم (4) قسم 43 (فرشاتي)", 10, "Bouira", Some("0770780702")),
        // 11 - Tamanrasset
        desk(1101, "Station Tamenrasset", "qartier Mouflon derrière maison des finances (trésor)", 11, "Tamanrasset", Some("0770780713")),
        // 12 - Tébessa
        desk(1201, "Station Tebessa", "Lotissement El Arbi Tbessi (Skanska) face à Direction d'Algérie Poste", 12, "Tebessa", Some("0770507961")),
        // 13 - Tlemcen
        desk(1301, "Station Tlemcen", "Kiffane Lot Benchaib (derrière l'hôtel Ibis)", 13, "Tlemcen", Some("0770451113")),
        desk(1302, "Station Maghnia", "route de Oujda Hai Ouled Bensaber, Maghnia", 13, "Maghnia", Some("0770845020")),
        // 14 - Tiaret
        desk(1401, "Station Tiaret", "بجانب اذاعة تيارت وسط المدينة", 14, "Tiaret", Some("0770750979")),
        // 15 - Tizi Ouzou
        desk(1501, "Station Tizi Ouzou", "Local N2 RDC coop le printemps rue cité Mohamed arezki coté 5 juillet", 15, "Tizi Ouzou", Some("0795006815")),
        desk(1502, "Station Boghni", "RN30 à proximité de la pompe a essence NAFTAL", 15, "Boghni", Some("0563009792")),
        desk(1503, "Station Azazga", "Cité AADL 22 logement local n°1 Bt B2, Tizi bouchene", 15, "Azazga", Some("0770898601")),
        desk(1504, "Station Tizi ouzou nouvelle ville", "Zone sud Quartier « B » les 600. À coté direction régionale SAA", 15, "Tizi Ouzou", Some("0563009791")),
        // 16 - Alger
        desk(1601, "Station Alger Eucalyptus", "Les Eucalyptus", 16, "Les Eucalyptus", Some("0770163989")),
        desk(1602, "Station Alger Kouba", "Ferme pons garidi", 16, "Kouba", Some("0770486105")),
        desk(1603, "Station Alger Ain naadja", "حي 440 مسكن إجتماعي تساهمي عين المالحة عمارة 27 ب محل رقم 241", 16, "Djasr Kasentina", Some("0770531704")),
        desk(1604, "Station Alger Cheraga", "Cartier issat idir numero 03 cheraga", 16, "Cheraga", Some("0563009787")),
        desk(1605, "Station Alger Dely brahim", "Route de cheraga , dely Brahim", 16, "Dely Ibrahim", Some("0770530923")),
        desk(1606, "Station Alger Oued Smar", "Zone industrielle Oued Smar BP 02M Alger", 16, "Oued Smar", Some("0770118225")),
        desk(1607, "Station Alger Draria", "حي دريوش 145 عمارة 7 محل 150 درارية", 16, "Draria", Some("0771110157 / 0770808759")),
        desk(1608, "Station Alger Plage", "Alger plage", 16, "Bordj El Bahri", Some("0770912158")),
        desk(1609, "Station Alger Reghaia", "حي 822 مسكن عميروش رغاية", 16, "Reghaia", Some("0770012586")),
        desk(1610, "Station Alger Sacré Coeur", "Rue du Sacré-Cœur, Bâtiment 5/7, Entrée B, Rez-de-chaussée", 16, "Alger Centre", Some("0770808228")),
        desk(1611, "Station Alger Ain Benian", "Ain Benian", 16, "Ain Benian", Some("0770164273")),
        // 17 - Djelfa
        desk(1701, "Station Djelfa - Ain Oussera", "حي محمد بوضياف ، شارع دبي مقابل محل سيفو كوسميتيك", 17, "Ain Oussera", Some("0770953266")),
        desk(1702, "Station DJELFA", "Cite Mohamed chaabani 161 N 35 rue daira", 17, "Djelfa", Some("0770753611")),
        // 18 - Jijel
        desk(1801, "Station JIJEL", "رقم 02 شارع المجاهدين - باب الصور بجانب مخبر التحاليل بورويد", 18, "Jijel", Some("0770976207")),
        // 19 - Sétif
        desk(1901, "Station Setif - El eulma", "حي 100 مسكن تساهمي ع 10 رقم 102 العلمة", 19, "El Eulma", Some("0770521261")),
        desk(1902, "Station Setif El Hidab", "حي الهضاب وراء حديقة لعرائس", 19, "Setif", Some("0770751080 / 0771823802")),
        desk(1903, "Station Ain Azel", "عين ازال وسط المدينة بجانب بنك cnep", 19, "Ain Azel", Some("0770899367")),
        desk(1904, "Station Setif - Ain oulmene", "Rue 8 mai 1945 Ainoulmen -Setif", 19, "Ain Oulmane", Some("0770751081")),
        desk(1905, "Station Setif - cité Bouaroua", "Cité Bouaroua, Sétif ville", 19, "Setif", Some("0770898787")),
        // 20 - Saïda
        desk(2001, "Station SAIDA", "حي الدرب العريق فوق البلدية", 20, "Saida", Some("0770751017")),
        // 21 - Skikda
        desk(2101, "Station Skikda", "Rue Mohamed namous la monté de hammam darraji", 21, "Skikda", Some("0770451085")),
        // 22 - Sidi Bel Abbès
        desk(2201, "Station Telagh", "شارع كيفرو كيفران رقم 30 محل أ بلدية تلاغ", 22, "Telagh", Some("0770164534")),
        desk(2202, "Station Sidi Bel Abbes", "حي العربي بن مهيدي رقم 36 شارع خيرة نبية القطعة 94", 22, "Sidi Bel Abbes", Some("0770486538")),
        // 23 - Annaba
        desk(2301, "Station Annaba", "11 rue necib arifa l'olympia à côté du bureau de main d'œuvre", 23, "Annaba", Some("0561869178 / 0770451061")),
        desk(2302, "Station Annaba El bouni", "Cité belle vue 900 logts à côté d'Algérie Télécom", 23, "El Bouni", Some("0770773406 / 0770336039")),
        // 24 - Guelma
        desk(2401, "Station Guelma", "شارع حساني الصالح رقم ب90 قالمة", 24, "Guelma", Some("0772421972 / 0770520817")),
        // 25 - Constantine
        desk(2501, "Station Constantine-Sidi Mebrouk", "Sidi Mabrouk", 25, "Didouche Mourad", Some("0770797329")),
        desk(2502, "Station Constantine-Ali Mendjeli", "Cité 400Logts UV 05 Ali Mendjeli, El Khroub", 25, "El Khroub", Some("0770911838")),
        // 26 - Médéa
        desk(2601, "Station Médéa", "Pôle urbain Médéa", 26, "Medea", Some("0770797168 / 0770091207")),
        // 27 - Mostaganem
        desk(2701, "Station Mostaganem", "24 rue bouzzouar miloud city nigrel", 27, "Hadjadj", Some("0770371420")),
        desk(2702, "Station Mostaganem 2", "AV ouled Aissa Belkacem", 27, "Mostaganem", Some("0770845070")),
        // 28 - M'Sila
        desk(2801, "Station Boussaâda", "محل (أ) حي النصر 123/18 بلدية بوسعادة", 28, "Bou Saada", Some("0778979623")),
        desk(2802, "Station M'Sila", "M'Sila", 28, "M'Sila", None),
        desk(2803, "Station M'sila New", "حي تعاونية المقراني ،مقابل ملعب ورتال البشير", 28, "M'sila", Some("0770164280")),
        // 29 - Mascara
        desk(2901, "Station Mascara", "la zone 8 la route de la salle des fêtes bent el soltana", 29, "Mascara", Some("0770775964")),
        desk(2902, "Station Mascara - Sig", "حي طريق شادلي ، طلعة محطة مسافرين طريق معسكر", 29, "Sig", Some("0770797163")),
        // 30 - Ouargla
        desk(3001, "Station Ouargla", "المخادمة طريق المقبرة اونفاص سوبيرات ميم", 30, "Ouargla", Some("0770559675")),
        desk(3002, "Station Ouargla-Hassi Messaoud", "Derrière la CNAS À côté Yalidine", 30, "Hassi Messaoud", Some("0674273120")),
        // 31 - Oran
        desk(3101, "Station Oran Es Senia (Maraval)", "Cité Othemania (ex-Maraval), Résidence Rosa Lina", 31, "Es Senia", Some("0770898647 / 0770898629")),
        desk(3102, "Station Oran - Hai Sabah", "حي الصباح على الطريق الكبيرة تع الطرامواي", 31, "Bir El Djir", Some("0770753696")),
        desk(3103, "Station Oran - Gambetta", "Avenue d'Arcole, Gambetta, Oran", 31, "Oran", Some("0770911476")),
        desk(3104, "Station Oran Khemisti", "Oran Khemisti", 31, "Mers El Kebir", Some("0770163993 / 0770164228")),
        // 32 - El Bayadh
        desk(3201, "Station El Bayadh", "Auto route sid haj bahous en face pharmacie lahouel", 32, "El Bayadh", Some("0675265384")),
        // 33 - Illizi
        desk(3301, "Station Illizi", "حي الوقواق بجانب كانكايري معطالله شارع الاقواس", 33, "Illizi", Some("0791917907")),
        desk(3302, "Station In Amenas New", "In amenas بجانب مسجد السنة", 33, "In Amenas", Some("0658305407")),
        // 34 - Bordj Bou Arréridj
        desk(3401, "Station Bordj Bou Arreridj", "شارع ب 15 تعاونية وراء مستشفى الاطفال", 34, "Bordj Bou Arreridj", Some("0675553122")),
        // 35 - Boumerdès
        desk(3501, "Station Bordj Menaiel", "Les coopérative à côté des urgences", 35, "Bordj Menaiel", Some("0770772556")),
        desk(3502, "Station BOUMERDES", "Cite 11 décembre coopérative résidence zidane en face bella beauty", 35, "Boumerdes", Some("0770912531 / 0770898605")),
        desk(3503, "Station Dellys", "حي المجاهد المرحوم مزاري علي الطريق الوطني رقم 24", 35, "Dellys", Some("0770912056")),
        // 36 - El Tarf
        desk(3601, "Station El tarf", "El Tarf", 36, "El Tarf", None),
        desk(3602, "Station El Taref New", "المحل رقم 03 شارع تين خميس قسم 032 قطعة رقم 166", 36, "El Tarf", Some("0652668097 / 0770936164")),
        // 38 - Tissemsilt
        desk(3801, "Station Tissemsilt", "مقابل مقر الولاية بجانب المركز الطبي للشرطة", 38, "Tissemsilt", Some("0672852152")),
        // 39 - El Oued
        desk(3901, "Station El OUED", "حي الرمال طريق مجمع مصطفاوي بالقرب من مجمع السلام الطبي", 39, "El Oued", Some("0654707097 / 0770771833")),
        // 40 - Khenchela
        desk(4001, "Station Khenchela", "في النصر تحت سوق النساء خنشلة", 40, "Khenchela", Some("0770521072")),
        // 41 - Souk Ahras
        desk(4101, "Station souk ahras", "حي الشهيد 2 حصة رقم 98 سوق أهراس", 41, "Souk Ahras", Some("0770776689")),
        // 42 - Tipaza
        desk(4201, "Station TIPAZA KOLEA", "شارع بوناطيرو جلول مج 110 قسم 03 بلدية القليعة", 42, "Kolea", Some("0770912305")),
        desk(4202, "Station Hadjout", "Face au lycée rekaizi", 42, "Hadjout", Some("0770807997")),
        desk(4203, "Station Tipaza", "Cite 50+20 logts LSP TIPAZA", 42, "Tipaza", Some("0770797338")),
        // 43 - Mila
        desk(4301, "Station Chelghoum Laid", "نهج ماضي موسى شلغوم العيد", 43, "Chelghoum Laid", Some("0770898639")),
        desk(4302, "Station MILA", "تونسي ميلة بجانب محطة الحافلات الديانسي", 43, "Mila", Some("0770738712")),
        // 44 - Aïn Defla
        desk(4401, "Station Aïn Defla", "Ain Defla", 44, "Ain Defla", Some("0770780589")),
        // 45 - Naâma
        desk(4501, "Station Naama - Mechria", "Rue Taibi Ahmed a côté de CEM Madaoui", 45, "Mecheria", Some("0668426646")),
        // 46 - Aïn Témouchent
        desk(4601, "Station Ain temouchent - Beni Saf", "N°22 Rue de la révolution benisaf", 46, "Beni Saf", Some("0770797349")),
        desk(4602, "Station Ain temouchent", "4 Rue Mohamed boudiaf - Les Castors", 46, "Ain Temouchent", Some("0770868817")),
        // 47 - Ghardaïa
        desk(4701, "Station GHARDAIA", "شارع ديدوش مراد حي الحاج مسعود", 47, "Ghardaia", Some("0770531062 / 0770531289")),
        // 48 - Relizane
        desk(4801, "Station Relizane", "Bd de la Republique, Relizane", 48, "Relizane", Some("0770783044")),
        desk(4802, "Station Oued Rhiou", "شارع بوعبد الله العمارة A الطابق الارضي", 48, "Oued Rhiou", Some("0770899295")),
        // 51 - Ouled Djellal
        desk(5101, "Station Ouled Djellal", "قريب من مكتب يالدين و دائرة و مطعم الانس", 51, "Ouled Djellal", Some("0550576439 / 0555132822")),
        // 53 - In Salah
        desk(5301, "Station In Salah", "حي قصر العرب سنترفيل", 53, "In Salah", Some("0670152552 / 0554006696")),
        // 55 - Touggourt
        desk(5501, "Station Touggourt", "تقرت دراع البروض", 55, "Touggourt", Some("0770999634 / 0697052872")),
        // 56 - Djanet
        desk(5601, "Station Djanet", "Djanet حي تين خاتمة بجانب الصادق لبيع قطع الغيار", 56, "Djanet", Some("0698502737")),
        // 57 - El M'Ghair
        desk(5701, "Station El M'Ghair", "حي 19 مارس بالقرب من المحكمة", 57, "El M'ghair", Some("0770898640")),
    ]
}
