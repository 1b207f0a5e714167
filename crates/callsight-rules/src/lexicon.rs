//! Embedded closed-vocabulary lexicon.
//!
//! One row per surface form: form, lemma, part of speech and candidate
//! gender/number/case readings encoded as `g,n,c` triples separated by `|`
//! (`-` means the category does not apply, an empty spec means a single
//! reading with no categories). Coverage tracks exactly the vocabulary the
//! insight rules need, plus a dictionary of common Russian given names whose
//! oblique forms are generated by a crude declension.
//!
//! All keys are lowercase with `ё` folded to `е`.

use crate::morph::{Analysis, Case, Gender, Number, Pos};

pub(crate) const FORMS: &[(&str, &str, Pos, &str)] = &[
    // --- greetings -------------------------------------------------------
    ("привет", "привет", Pos::Noun, "m,s,nom|m,s,acc"),
    ("здравствовать", "здравствовать", Pos::Verb, ""),
    ("здравствуй", "здравствовать", Pos::Verb, "-,s,-"),
    ("здравствуйте", "здравствовать", Pos::Verb, "-,p,-"),
    ("здравствует", "здравствовать", Pos::Verb, "-,s,-"),
    ("приветствовать", "приветствовать", Pos::Verb, ""),
    ("приветствую", "приветствовать", Pos::Verb, "-,s,-"),
    ("приветствуем", "приветствовать", Pos::Verb, "-,p,-"),
    ("приветствуете", "приветствовать", Pos::Verb, "-,p,-"),
    // --- добрый / хороший ------------------------------------------------
    ("добрый", "добрый", Pos::Adjf, "m,s,nom|m,s,acc"),
    ("доброго", "добрый", Pos::Adjf, "m,s,gen|n,s,gen|m,s,acc"),
    ("доброму", "добрый", Pos::Adjf, "m,s,dat|n,s,dat"),
    ("добрым", "добрый", Pos::Adjf, "m,s,ins|n,s,ins|-,p,dat"),
    ("добром", "добрый", Pos::Adjf, "m,s,loc|n,s,loc"),
    ("добрая", "добрый", Pos::Adjf, "f,s,nom"),
    ("доброй", "добрый", Pos::Adjf, "f,s,gen|f,s,dat|f,s,ins|f,s,loc"),
    ("добрую", "добрый", Pos::Adjf, "f,s,acc"),
    ("доброе", "добрый", Pos::Adjf, "n,s,nom|n,s,acc"),
    ("добрые", "добрый", Pos::Adjf, "-,p,nom|-,p,acc"),
    ("добрых", "добрый", Pos::Adjf, "-,p,gen|-,p,loc|-,p,acc"),
    ("добрыми", "добрый", Pos::Adjf, "-,p,ins"),
    ("хороший", "хороший", Pos::Adjf, "m,s,nom|m,s,acc"),
    ("хорошего", "хороший", Pos::Adjf, "m,s,gen|n,s,gen|m,s,acc"),
    ("хорошему", "хороший", Pos::Adjf, "m,s,dat|n,s,dat"),
    ("хорошим", "хороший", Pos::Adjf, "m,s,ins|n,s,ins|-,p,dat"),
    ("хорошем", "хороший", Pos::Adjf, "m,s,loc|n,s,loc"),
    ("хорошая", "хороший", Pos::Adjf, "f,s,nom"),
    ("хорошей", "хороший", Pos::Adjf, "f,s,gen|f,s,dat|f,s,ins|f,s,loc"),
    ("хорошую", "хороший", Pos::Adjf, "f,s,acc"),
    ("хорошее", "хороший", Pos::Adjf, "n,s,nom|n,s,acc"),
    ("хорошие", "хороший", Pos::Adjf, "-,p,nom|-,p,acc"),
    ("хороших", "хороший", Pos::Adjf, "-,p,gen|-,p,loc|-,p,acc"),
    ("хорошими", "хороший", Pos::Adjf, "-,p,ins"),
    // --- time-of-day nouns -----------------------------------------------
    ("утро", "утро", Pos::Noun, "n,s,nom|n,s,acc"),
    ("утра", "утро", Pos::Noun, "n,s,gen"),
    ("утру", "утро", Pos::Noun, "n,s,dat"),
    ("утром", "утро", Pos::Noun, "n,s,ins"),
    ("утре", "утро", Pos::Noun, "n,s,loc"),
    ("день", "день", Pos::Noun, "m,s,nom|m,s,acc"),
    ("дня", "день", Pos::Noun, "m,s,gen"),
    ("дню", "день", Pos::Noun, "m,s,dat"),
    ("днем", "день", Pos::Noun, "m,s,ins"),
    ("дне", "день", Pos::Noun, "m,s,loc"),
    ("дни", "день", Pos::Noun, "-,p,nom|-,p,acc"),
    ("дней", "день", Pos::Noun, "-,p,gen"),
    ("вечер", "вечер", Pos::Noun, "m,s,nom|m,s,acc"),
    ("вечера", "вечер", Pos::Noun, "m,s,gen"),
    ("вечеру", "вечер", Pos::Noun, "m,s,dat"),
    ("вечером", "вечер", Pos::Noun, "m,s,ins"),
    ("вечере", "вечер", Pos::Noun, "m,s,loc"),
    ("время", "время", Pos::Noun, "n,s,nom|n,s,acc"),
    ("времени", "время", Pos::Noun, "n,s,gen|n,s,dat|n,s,loc"),
    ("временем", "время", Pos::Noun, "n,s,ins"),
    ("сутки", "сутки", Pos::Noun, "-,p,nom|-,p,acc"),
    ("суток", "сутки", Pos::Noun, "-,p,gen"),
    ("суткам", "сутки", Pos::Noun, "-,p,dat"),
    ("сутками", "сутки", Pos::Noun, "-,p,ins"),
    ("сутках", "сутки", Pos::Noun, "-,p,loc"),
    // --- farewells -------------------------------------------------------
    ("до", "до", Pos::Prep, ""),
    ("свидание", "свидание", Pos::Noun, "n,s,nom|n,s,acc"),
    ("свидания", "свидание", Pos::Noun, "n,s,gen"),
    ("свиданию", "свидание", Pos::Noun, "n,s,dat"),
    ("свиданием", "свидание", Pos::Noun, "n,s,ins"),
    ("свидании", "свидание", Pos::Noun, "n,s,loc"),
    ("встреча", "встреча", Pos::Noun, "f,s,nom"),
    ("встречи", "встреча", Pos::Noun, "f,s,gen"),
    ("встрече", "встреча", Pos::Noun, "f,s,dat|f,s,loc"),
    ("встречу", "встреча", Pos::Noun, "f,s,acc"),
    ("встречей", "встреча", Pos::Noun, "f,s,ins"),
    ("завтра", "завтра", Pos::Advb, ""),
    ("завтрашний", "завтрашний", Pos::Adjf, "m,s,nom|m,s,acc"),
    ("завтрашнего", "завтрашний", Pos::Adjf, "m,s,gen|n,s,gen|m,s,acc"),
    ("завтрашнему", "завтрашний", Pos::Adjf, "m,s,dat|n,s,dat"),
    ("завтрашним", "завтрашний", Pos::Adjf, "m,s,ins|n,s,ins|-,p,dat"),
    ("завтрашнем", "завтрашний", Pos::Adjf, "m,s,loc|n,s,loc"),
    ("завтрашняя", "завтрашний", Pos::Adjf, "f,s,nom"),
    ("завтрашней", "завтрашний", Pos::Adjf, "f,s,gen|f,s,dat|f,s,ins|f,s,loc"),
    ("завтрашнюю", "завтрашний", Pos::Adjf, "f,s,acc"),
    ("завтрашнее", "завтрашний", Pos::Adjf, "n,s,nom|n,s,acc"),
    ("завтрашние", "завтрашний", Pos::Adjf, "-,p,nom|-,p,acc"),
    ("завтрашних", "завтрашний", Pos::Adjf, "-,p,gen|-,p,loc|-,p,acc"),
    ("всего", "весь", Pos::Adjf, "m,s,gen|n,s,gen"),
    // --- company prefixes ------------------------------------------------
    ("компания", "компания", Pos::Noun, "f,s,nom"),
    ("компании", "компания", Pos::Noun, "f,s,gen|f,s,dat|f,s,loc|-,p,nom"),
    ("компанию", "компания", Pos::Noun, "f,s,acc"),
    ("компанией", "компания", Pos::Noun, "f,s,ins"),
    ("компаний", "компания", Pos::Noun, "-,p,gen"),
    ("компаниям", "компания", Pos::Noun, "-,p,dat"),
    ("компаниях", "компания", Pos::Noun, "-,p,loc"),
    ("организация", "организация", Pos::Noun, "f,s,nom"),
    ("организации", "организация", Pos::Noun, "f,s,gen|f,s,dat|f,s,loc|-,p,nom"),
    ("организацию", "организация", Pos::Noun, "f,s,acc"),
    ("организацией", "организация", Pos::Noun, "f,s,ins"),
    ("организаций", "организация", Pos::Noun, "-,p,gen"),
    ("предприятие", "предприятие", Pos::Noun, "n,s,nom|n,s,acc"),
    ("предприятия", "предприятие", Pos::Noun, "n,s,gen|-,p,nom"),
    ("предприятию", "предприятие", Pos::Noun, "n,s,dat"),
    ("предприятием", "предприятие", Pos::Noun, "n,s,ins"),
    ("предприятии", "предприятие", Pos::Noun, "n,s,loc"),
    ("предприятий", "предприятие", Pos::Noun, "-,p,gen"),
    // --- introduction function words -------------------------------------
    ("я", "я", Pos::Npro, "-,s,nom"),
    ("меня", "я", Pos::Npro, "-,s,gen|-,s,acc"),
    ("мне", "я", Pos::Npro, "-,s,dat|-,s,loc"),
    ("мной", "я", Pos::Npro, "-,s,ins"),
    ("мною", "я", Pos::Npro, "-,s,ins"),
    ("это", "это", Pos::Npro, "n,s,nom|n,s,acc"),
    ("звать", "звать", Pos::Verb, ""),
    ("зовут", "звать", Pos::Verb, "-,p,-"),
    ("зовет", "звать", Pos::Verb, "-,s,-"),
    ("звали", "звать", Pos::Verb, "-,p,-"),
    ("звал", "звать", Pos::Verb, "m,s,-"),
    ("звала", "звать", Pos::Verb, "f,s,-"),
    ("зови", "звать", Pos::Verb, "-,s,-"),
    ("зовите", "звать", Pos::Verb, "-,p,-"),
    ("мой", "мой", Pos::Adjf, "m,s,nom|m,s,acc"),
    ("моего", "мой", Pos::Adjf, "m,s,gen|n,s,gen|m,s,acc"),
    ("моему", "мой", Pos::Adjf, "m,s,dat|n,s,dat"),
    ("моим", "мой", Pos::Adjf, "m,s,ins|n,s,ins|-,p,dat"),
    ("моем", "мой", Pos::Adjf, "m,s,loc|n,s,loc"),
    ("моя", "мой", Pos::Adjf, "f,s,nom"),
    ("моей", "мой", Pos::Adjf, "f,s,gen|f,s,dat|f,s,ins|f,s,loc"),
    ("мою", "мой", Pos::Adjf, "f,s,acc"),
    ("мое", "мой", Pos::Adjf, "n,s,nom|n,s,acc"),
    ("мои", "мой", Pos::Adjf, "-,p,nom|-,p,acc"),
    ("моих", "мой", Pos::Adjf, "-,p,gen|-,p,loc|-,p,acc"),
    ("моими", "мой", Pos::Adjf, "-,p,ins"),
    ("наш", "наш", Pos::Adjf, "m,s,nom|m,s,acc"),
    ("нашего", "наш", Pos::Adjf, "m,s,gen|n,s,gen|m,s,acc"),
    ("нашему", "наш", Pos::Adjf, "m,s,dat|n,s,dat"),
    ("нашим", "наш", Pos::Adjf, "m,s,ins|n,s,ins|-,p,dat"),
    ("нашем", "наш", Pos::Adjf, "m,s,loc|n,s,loc"),
    ("наша", "наш", Pos::Adjf, "f,s,nom"),
    ("нашей", "наш", Pos::Adjf, "f,s,gen|f,s,dat|f,s,ins|f,s,loc"),
    ("нашу", "наш", Pos::Adjf, "f,s,acc"),
    ("наше", "наш", Pos::Adjf, "n,s,nom|n,s,acc"),
    ("наши", "наш", Pos::Adjf, "-,p,nom|-,p,acc"),
    ("наших", "наш", Pos::Adjf, "-,p,gen|-,p,loc|-,p,acc"),
    ("нашими", "наш", Pos::Adjf, "-,p,ins"),
    ("имя", "имя", Pos::Noun, "n,s,nom|n,s,acc"),
    ("имени", "имя", Pos::Noun, "n,s,gen|n,s,dat|n,s,loc"),
    ("именем", "имя", Pos::Noun, "n,s,ins"),
    ("имена", "имя", Pos::Noun, "-,p,nom|-,p,acc"),
    ("имен", "имя", Pos::Noun, "-,p,gen"),
];

/// Common Russian given names, nominative form only; oblique forms are
/// generated by [`name_forms`].
pub(crate) const NAMES: &[(&str, Gender)] = &[
    ("анна", Gender::Femn),
    ("ангелина", Gender::Femn),
    ("мария", Gender::Femn),
    ("елена", Gender::Femn),
    ("ольга", Gender::Femn),
    ("наталья", Gender::Femn),
    ("татьяна", Gender::Femn),
    ("ирина", Gender::Femn),
    ("светлана", Gender::Femn),
    ("екатерина", Gender::Femn),
    ("юлия", Gender::Femn),
    ("виктория", Gender::Femn),
    ("анастасия", Gender::Femn),
    ("дарья", Gender::Femn),
    ("ксения", Gender::Femn),
    ("марина", Gender::Femn),
    ("людмила", Gender::Femn),
    ("галина", Gender::Femn),
    ("валентина", Gender::Femn),
    ("вера", Gender::Femn),
    ("надежда", Gender::Femn),
    ("любовь", Gender::Femn),
    ("оксана", Gender::Femn),
    ("полина", Gender::Femn),
    ("евгения", Gender::Femn),
    ("александра", Gender::Femn),
    ("алина", Gender::Femn),
    ("алла", Gender::Femn),
    ("софия", Gender::Femn),
    ("иван", Gender::Masc),
    ("сергей", Gender::Masc),
    ("алексей", Gender::Masc),
    ("дмитрий", Gender::Masc),
    ("андрей", Gender::Masc),
    ("михаил", Gender::Masc),
    ("владимир", Gender::Masc),
    ("александр", Gender::Masc),
    ("максим", Gender::Masc),
    ("никита", Gender::Masc),
    ("павел", Gender::Masc),
    ("петр", Gender::Masc),
    ("виктор", Gender::Masc),
    ("олег", Gender::Masc),
    ("игорь", Gender::Masc),
    ("роман", Gender::Masc),
    ("константин", Gender::Masc),
    ("василий", Gender::Masc),
    ("николай", Gender::Masc),
    ("евгений", Gender::Masc),
    ("кирилл", Gender::Masc),
    ("артем", Gender::Masc),
    ("денис", Gender::Masc),
    ("антон", Gender::Masc),
    ("егор", Gender::Masc),
    ("илья", Gender::Masc),
    ("тимур", Gender::Masc),
    ("вадим", Gender::Masc),
    ("валерий", Gender::Masc),
    ("григорий", Gender::Masc),
    ("станислав", Gender::Masc),
    ("юрий", Gender::Masc),
    ("федор", Gender::Masc),
    ("степан", Gender::Masc),
    ("богдан", Gender::Masc),
    ("глеб", Gender::Masc),
    ("марк", Gender::Masc),
    ("матвей", Gender::Masc),
    ("арсений", Gender::Masc),
    ("владислав", Gender::Masc),
    ("леонид", Gender::Masc),
    ("борис", Gender::Masc),
    ("руслан", Gender::Masc),
    ("вячеслав", Gender::Masc),
    ("анатолий", Gender::Masc),
];

/// Crude declension by nominative ending; good enough for recognizing
/// inflected name mentions, not for generation.
pub(crate) fn name_forms(nom: &str) -> Vec<String> {
    let chars: Vec<char> = nom.chars().collect();
    let last = *chars.last().unwrap_or(&' ');
    let stem: String = chars[..chars.len().saturating_sub(1)].iter().collect();
    match last {
        'а' => {
            let gen_vowel = match stem.chars().last() {
                Some('к') | Some('г') | Some('х') | Some('ж') | Some('ш') | Some('ч')
                | Some('щ') => "и",
                _ => "ы",
            };
            vec![
                nom.to_string(),
                format!("{stem}{gen_vowel}"),
                format!("{stem}е"),
                format!("{stem}у"),
                format!("{stem}ой"),
            ]
        }
        'я' => vec![
            nom.to_string(),
            format!("{stem}и"),
            format!("{stem}е"),
            format!("{stem}ю"),
            format!("{stem}ей"),
        ],
        'й' => vec![
            nom.to_string(),
            format!("{stem}я"),
            format!("{stem}ю"),
            format!("{stem}ем"),
            format!("{stem}е"),
        ],
        'ь' => vec![
            nom.to_string(),
            format!("{stem}я"),
            format!("{stem}ю"),
            format!("{stem}ем"),
            format!("{stem}е"),
            format!("{stem}и"),
            format!("{stem}ью"),
        ],
        _ => vec![
            nom.to_string(),
            format!("{nom}а"),
            format!("{nom}у"),
            format!("{nom}ом"),
            format!("{nom}е"),
        ],
    }
}

/// Parse a gram spec ("m,s,nom|f,s,gen", "" = one reading, no categories).
pub(crate) fn parse_grams(spec: &str) -> Vec<(Option<Gender>, Option<Number>, Option<Case>)> {
    if spec.is_empty() {
        return vec![(None, None, None)];
    }
    spec.split('|')
        .map(|triple| {
            let mut parts = triple.split(',');
            let gender = match parts.next() {
                Some("m") => Some(Gender::Masc),
                Some("f") => Some(Gender::Femn),
                Some("n") => Some(Gender::Neut),
                _ => None,
            };
            let number = match parts.next() {
                Some("s") => Some(Number::Sing),
                Some("p") => Some(Number::Plur),
                _ => None,
            };
            let case = match parts.next() {
                Some("nom") => Some(Case::Nomn),
                Some("gen") => Some(Case::Gent),
                Some("dat") => Some(Case::Datv),
                Some("acc") => Some(Case::Accs),
                Some("ins") => Some(Case::Ablt),
                Some("loc") => Some(Case::Loct),
                _ => None,
            };
            (gender, number, case)
        })
        .collect()
}

pub(crate) fn analyses(form_row: &(&str, &str, Pos, &str)) -> Vec<Analysis> {
    let (_, lemma, pos, grams) = form_row;
    parse_grams(grams)
        .into_iter()
        .map(|(gender, number, case)| Analysis {
            lemma: (*lemma).to_string(),
            pos: *pos,
            gender,
            number,
            case,
            is_name: false,
        })
        .collect()
}
