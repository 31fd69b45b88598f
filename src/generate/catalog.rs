//! Static text tables for the generator.
//!
//! All generated text is Spanish: the dataset is a catalog of Spanish-language
//! name meanings.

/// Curated knowledge about a specific name.
#[derive(Debug)]
pub struct CuratedName {
    /// Lookup key: lowercase, without accents.
    pub key: &'static str,
    pub etymology: &'static str,
    pub variants: &'static [&'static str],
    pub notable_bearers: &'static [&'static str],
    pub symbolism: &'static str,
    pub story: &'static str,
}

/// Names with hand-written descriptions.
pub const CURATED: &[CuratedName] = &[
    CuratedName {
        key: "alejandro",
        etymology: "Proviene del griego 'Alexandros' (Αλέξανδρος), compuesto por 'alexo' (proteger, defender) y 'andros' (hombre). Su significado es 'el que protege al hombre' o 'el defensor de la humanidad'.",
        variants: &["Alex", "Sandro", "Lisandro"],
        notable_bearers: &[
            "Alejandro Magno, rey de Macedonia, cuya visión y conquistas extendieron la cultura helenística, redefiniendo el mundo antiguo.",
            "Varios papas y santos han llevado este nombre, como San Alejandro de Alejandría, clave en los primeros concilios de la Iglesia.",
        ],
        symbolism: "Evoca liderazgo, ambición y la capacidad de crear imperios, tanto externos como internos. Es un nombre ligado a la estrategia y a la expansión de horizontes.",
        story: "Su legado, como el del gran conquistador, evoca la capacidad de unir mundos y expandir horizontes. Quien lleva este nombre aprende que la verdadera fuerza no está en la espada, sino en la visión para proteger y guiar a su gente.",
    },
    CuratedName {
        key: "cesar",
        etymology: "Originado en el latín 'Caesar', cognomen de una ilustre familia romana. Su etimología es incierta; podría derivar de 'caesaries' (cabellera) o 'caedere' (cortar), en alusión a un ancestro nacido por cesárea.",
        variants: &["Cesarino"],
        notable_bearers: &[
            "Julio César, general y estadista romano cuya vida y muerte marcaron el fin de la República y el inicio del Imperio. Su nombre se convirtió en sinónimo de 'emperador' (Káiser, Zar).",
            "César Chávez, líder campesino y activista por los derechos civiles en Estados Unidos.",
        ],
        symbolism: "Representa la autoridad, el poder de decisión y la capacidad de transformar la sociedad. Es un nombre que porta el peso de la historia y la determinación.",
        story: "El nombre resuena con el poder y la autoridad del líder romano que transformó la historia. Quien lo lleva hereda un eco de mando, estrategia y la audacia de cruzar cualquier Rubicón personal.",
    },
    CuratedName {
        key: "margarita",
        etymology: "Del griego 'margarites' (μαργαρίτης), que significa 'perla'. A través del latín, se asoció también a la flor homónima.",
        variants: &["Rita", "Marga", "Greta"],
        notable_bearers: &[
            "Santa Margarita de Antioquía, una de las santas más populares de la Edad Media, patrona de las parturientas.",
            "Margarita de Valois, reina de Francia y Navarra, conocida como la 'Reina Margot', figura clave en las guerras de religión.",
        ],
        symbolism: "Simboliza la pureza, la belleza oculta y la inocencia (como la perla dentro de la ostra y la flor de pétalos blancos). También se asocia con la isla de Margarita, conocida como la 'Perla del Caribe'.",
        story: "Como la perla que le da nombre y la flor que inspira leyendas, Margarita evoca una belleza que se forma en la adversidad. Su significado se despliega en pétalos de sencillez y en el tesoro de una resiliencia luminosa.",
    },
    CuratedName {
        key: "rosa",
        etymology: "Directamente del latín 'rosa', nombre de la flor, que a su vez podría tener raíces en el persa antiguo.",
        variants: &["Rosalía", "Rosario", "Rosana"],
        notable_bearers: &[
            "Santa Rosa de Lima, mística y primera santa de América.",
            "Rosa Parks, figura icónica del movimiento por los derechos civiles en Estados Unidos.",
            "En el esoterismo, la rosa es un símbolo central en el Rosacrucismo, representando el alma que florece en el centro de la cruz de la materia.",
        ],
        symbolism: "Es el arquetipo de la belleza, el amor y la pasión. Sus espinas añaden el matiz de la protección y el sacrificio. Simboliza el misterio revelado y la perfección espiritual.",
        story: "Más que una flor, es un símbolo universal de amor, pasión y misterio. El nombre Rosa guarda el secreto de una belleza que se defiende con espinas pero se entrega en su fragancia, un equilibrio entre delicadeza y fortaleza.",
    },
    CuratedName {
        key: "berna",
        etymology: "Principalmente un hipocorístico de Bernarda o Bernardo, de origen germánico ('berin-hard'), que significa 'fuerte como un oso'. También es el nombre de la capital de Suiza, cuya leyenda fundacional involucra a un oso.",
        variants: &["Bernardita", "Bernardo"],
        notable_bearers: &[
            "Santa Bernardita Soubirous, la vidente de Lourdes, cuyo nombre en su forma completa era Bernarde-Marie.",
            "Berna González Harbour, periodista y escritora española.",
        ],
        symbolism: "Combina la fuerza y la valentía del oso con la solidez y la diplomacia de la ciudad suiza. Es un nombre que evoca protección, resistencia y un carácter firme.",
        story: "Con la fuerza del oso y la solidez de la ciudad que nombra, Berna es un topónimo hecho persona. Simboliza un refugio de poder, una capital de carácter firme y un corazón que protege su territorio con lealtad.",
    },
];

/// Curated entry for a lookup key, if any.
#[must_use]
pub fn curated(key: &str) -> Option<&'static CuratedName> {
    CURATED.iter().find(|c| c.key == key)
}

// ---------------------------------------------------------------------------
// Phrase pools for names without curated data
// ---------------------------------------------------------------------------

pub const VIRTUES: &[&str] = &[
    "valentía",
    "sabiduría",
    "protección",
    "alegría",
    "resiliencia",
    "claridad",
    "creatividad",
    "fortaleza interior",
    "templanza",
    "curiosidad",
];

pub const CHARACTER: &[&str] = &[
    "empático",
    "leal",
    "visionario",
    "protector",
    "inspirador",
    "honesto",
    "sereno",
    "disciplinado",
    "compasivo",
    "observador",
];

pub const DRIVES: &[&str] = &[
    "liderazgo consciente",
    "búsqueda de verdad",
    "cuidado de los demás",
    "crecimiento personal",
    "sueños grandes",
    "decisiones justas",
    "aprendizaje continuo",
    "servicio generoso",
];

pub const ARCHETYPES: &[&str] = &["pioneros", "guardianes", "visionarios", "artistas"];
pub const LEGACIES: &[&str] = &["innovación", "protección", "creatividad", "sabiduría"];
pub const PURSUITS: &[&str] = &["justicia", "verdad", "belleza", "armonía"];
pub const EXEMPLARS: &[&str] = &["integridad", "resiliencia", "compasión", "valentía"];

// ---------------------------------------------------------------------------
// Story type selection lists
// ---------------------------------------------------------------------------

pub const BIBLICAL_NAMES: &[&str] = &[
    "josé", "jose", "maría", "maria", "mateo", "noah", "daniel", "gabriel", "sara", "david",
    "isabel", "isabella",
];
pub const CLASSICAL_ORIGINS: &[&str] = &["griego", "latín", "latin", "romano"];
pub const CLASSICAL_HISTORIC_NAMES: &[&str] = &["camila", "alejandro", "marco", "helen", "elena"];
pub const MYTHIC_ORIGINS: &[&str] = &["griego", "latín", "latin"];
pub const ARABIC_ORIGINS: &[&str] = &["árabe", "arabe"];
pub const ARABIC_HISTORIC_NAMES: &[&str] = &["aisha", "fatima", "omar", "youssef", "ahmed"];
pub const POETIC_NAMES: &[&str] = &["yuki", "sakura", "haru", "mei", "wei"];

// ---------------------------------------------------------------------------
// Story templates (`{nombre}` is substituted)
// ---------------------------------------------------------------------------

pub const TEMPLATE_HISTORICA: &str = "En crónicas y memorias, {nombre} aparece ligado a decisiones firmes y horizontes abiertos. \
    Aprendió a rectificar sin perder la dignidad y a sostener la palabra dada. \
    El nombre {nombre} inspira a tejer puentes entre generaciones y culturas, a ordenar el caos cotidiano \
    y a encender esperanza concreta donde otros renuncian. Liderazgo, sí, pero como servicio: \
    mirar a los ojos, escuchar, y avanzar con respeto incluso en la discrepancia.";

pub const TEMPLATE_BIBLICA: &str = "{nombre} aparece en tradiciones bíblicas, donde la fe atraviesa pruebas y renueva el corazón. \
    Su historia recuerda que la dignidad florece cuando se sirve con humildad y verdad. \
    Quien lleva {nombre} aprende a escuchar el silencio, a decidir con conciencia y a agradecer cada avance. \
    Ante la angustia, {nombre} confía; ante el éxito, comparte. Así el nombre se vuelve puente entre lo humano y lo sagrado.";

pub const TEMPLATE_MITOLOGICA: &str = "Los relatos antiguos susurran que {nombre} cruzó valles y montañas guiado por un juramento de honor. \
    No vencía por fuerza, sino por enfoque y templanza. Su huella, dicen, dejaba centellas sobre la piedra húmeda. \
    Quien porta {nombre} conserva ese pacto con lo extraordinario: entrenar sin alarde, cuidarse del orgullo, \
    y honrar el destino con disciplina. Cuando el miedo aparece, {nombre} lo convierte en maestro paciente.";

pub const TEMPLATE_POETICA: &str = "Dicen que cuando alguien susurra {nombre}, una brisa limpia aquieta las dudas. \
    El nombre guarda rumor de agua clara, paciencia y belleza sencilla. \
    Quien lo lleva aprende a elegir palabras que curan y silencios que sostienen. \
    Para brillar no necesita ruido: basta un gesto exacto, una mirada honesta, \
    y una decisión valiente en el momento justo, como una lámpara pequeña en cuarto oscuro.";

pub const TEMPLATE_FANTASTICA: &str = "En un bosque sin coordenadas, {nombre} halló una lámpara hecha de auroras. \
    Cada vez que alguien se perdía, el cristal encendía un sendero de luciérnagas hasta la salida. \
    Desde entonces, {nombre} simboliza coraje amable que guía sin imponer, ingenio que vuelve sombras en señales, \
    y ternura que recuerda el camino a casa incluso cuando el mundo gira demasiado rápido.";
