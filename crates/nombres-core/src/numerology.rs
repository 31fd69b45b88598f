//! Pythagorean name numerology.
//!
//! Each letter maps to 1..=9 (`a j s → 1`, `b k t → 2`, ...; accented
//! vowels and `ñ` map like their base letter). The letter values are summed
//! and the sum is reduced by adding its digits until it is a single digit,
//! except that the master numbers 11, 22 and 33 stop the reduction.

/// Master numbers are never reduced further.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Pythagorean value of a lowercase letter, 0 for anything else.
#[must_use]
pub const fn letter_value(c: char) -> u32 {
    match c {
        'a' | 'j' | 's' | 'á' | 'à' | 'ä' => 1,
        'b' | 'k' | 't' => 2,
        'c' | 'l' | 'u' | 'ú' | 'ü' => 3,
        'd' | 'm' | 'v' => 4,
        'e' | 'n' | 'w' | 'é' | 'è' | 'ë' | 'ñ' => 5,
        'f' | 'o' | 'x' | 'ó' | 'ò' | 'ö' => 6,
        'g' | 'p' | 'y' => 7,
        'h' | 'q' | 'z' => 8,
        'i' | 'r' | 'í' | 'ì' | 'ï' => 9,
        _ => 0,
    }
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce a letter sum to its name number.
#[must_use]
pub fn reduce(mut value: u32) -> u32 {
    while value > 9 && !MASTER_NUMBERS.contains(&value) {
        value = digit_sum(value);
    }
    value
}

/// Name number of `name` (case-insensitive).
#[must_use]
pub fn name_number(name: &str) -> u32 {
    let sum: u32 = name.to_lowercase().chars().map(letter_value).sum();
    reduce(sum)
}

/// Interpretation of a name number.
#[must_use]
pub const fn meaning(number: u32) -> &'static str {
    match number {
        1 => {
            "Liderazgo, independencia y originalidad. Es el número del pionero, aquel que abre caminos con una energía y determinación únicas. Su reto es aprender a colaborar sin perder su individualidad."
        }
        2 => {
            "Cooperación, diplomacia y sensibilidad. Representa la dualidad y la unión. Es el número del mediador, que busca la armonía y valora las relaciones. Su fuerza reside en la paciencia y la empatía."
        }
        3 => {
            "Comunicación, creatividad y optimismo. Es el número del artista y el comunicador. Su don es la expresión y la alegría de vivir, inspirando a otros con su entusiasmo. Su reto es no dispersar su energía."
        }
        4 => {
            "Estructura, orden y pragmatismo. Representa la estabilidad y el trabajo duro. Es el número del constructor, que crea bases sólidas y valora la disciplina. Su poder es la constancia y la fiabilidad."
        }
        5 => {
            "Libertad, aventura y cambio. Es el número del viajero y el explorador del espíritu. Ama la variedad y se adapta con facilidad a nuevas situaciones. Su lección es usar su libertad con responsabilidad."
        }
        6 => {
            "Armonía, familia y responsabilidad. Representa el amor y el servicio a la comunidad. Es el número del cuidador, que nutre y protege a los suyos. Su don es la compasión y la búsqueda de la belleza."
        }
        7 => {
            "Análisis, introspección y espiritualidad. Es el número del sabio y el buscador de la verdad. Necesita tiempo para la reflexión y el estudio. Su camino es el del conocimiento profundo y la conexión con lo trascendente."
        }
        8 => {
            "Poder, ambición y materialización. Representa el éxito material y la autoridad. Es el número del estratega, que sabe manifestar sus visiones en el mundo real. Su reto es equilibrar lo material con lo espiritual."
        }
        9 => {
            "Humanitarismo, compasión y finalización. Es el número del idealista y el filántropo. Tiene una visión global y un profundo amor por la humanidad. Su misión es servir desinteresadamente y cerrar ciclos."
        }
        _ => "Significado no disponible.",
    }
}
