use std::sync::OnceLock;

use hashbrown::HashMap;

use crate::inflection;

const CLOSED_CLASS: &[(&str, &str)] = &[
    // determiners
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("every", "DT"),
    ("each", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("all", "DT"),
    ("both", "DT"),
    ("either", "DT"),
    ("neither", "DT"),
    ("another", "DT"),
    // prepositions and subordinating conjunctions
    ("of", "IN"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("by", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("into", "IN"),
    ("onto", "IN"),
    ("upon", "IN"),
    ("about", "IN"),
    ("above", "IN"),
    ("below", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("between", "IN"),
    ("among", "IN"),
    ("through", "IN"),
    ("during", "IN"),
    ("before", "IN"),
    ("after", "IN"),
    ("since", "IN"),
    ("until", "IN"),
    ("against", "IN"),
    ("without", "IN"),
    ("within", "IN"),
    ("along", "IN"),
    ("across", "IN"),
    ("behind", "IN"),
    ("beyond", "IN"),
    ("near", "IN"),
    ("toward", "IN"),
    ("towards", "IN"),
    ("around", "IN"),
    ("because", "IN"),
    ("although", "IN"),
    ("though", "IN"),
    ("while", "IN"),
    ("if", "IN"),
    ("whether", "IN"),
    ("unless", "IN"),
    ("than", "IN"),
    ("as", "IN"),
    ("like", "IN"),
    ("per", "IN"),
    ("via", "IN"),
    ("despite", "IN"),
    ("except", "IN"),
    // particles
    ("off", "RP"),
    ("out", "RP"),
    ("up", "RP"),
    ("down", "RP"),
    // coordinating conjunctions
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("plus", "CC"),
    ("to", "TO"),
    // pronouns
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("her", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("myself", "PRP"),
    ("yourself", "PRP"),
    ("himself", "PRP"),
    ("herself", "PRP"),
    ("itself", "PRP"),
    ("ourselves", "PRP"),
    ("themselves", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("which", "WDT"),
    ("whatever", "WDT"),
    ("who", "WP"),
    ("whom", "WP"),
    ("what", "WP"),
    ("whoever", "WP"),
    ("whose", "WP$"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    ("whenever", "WRB"),
    ("wherever", "WRB"),
    // modals
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("ought", "MD"),
    ("ca", "MD"),
    ("wo", "MD"),
    ("sha", "MD"),
    ("'ll", "MD"),
    ("'d", "MD"),
    ("there", "EX"),
    // adverbs
    ("not", "RB"),
    ("n't", "RB"),
    ("very", "RB"),
    ("too", "RB"),
    ("also", "RB"),
    ("just", "RB"),
    ("only", "RB"),
    ("even", "RB"),
    ("still", "RB"),
    ("already", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("sometimes", "RB"),
    ("soon", "RB"),
    ("now", "RB"),
    ("then", "RB"),
    ("here", "RB"),
    ("again", "RB"),
    ("almost", "RB"),
    ("quite", "RB"),
    ("rather", "RB"),
    ("perhaps", "RB"),
    ("maybe", "RB"),
    ("ever", "RB"),
    ("once", "RB"),
    ("twice", "RB"),
    ("away", "RB"),
    ("back", "RB"),
    ("else", "RB"),
    ("well", "RB"),
    ("however", "RB"),
    ("thus", "RB"),
    ("therefore", "RB"),
    ("instead", "RB"),
    ("indeed", "RB"),
    ("anyway", "RB"),
    ("together", "RB"),
    ("so", "RB"),
    ("yet", "RB"),
    ("more", "RBR"),
    ("most", "RBS"),
    ("much", "JJ"),
    ("many", "JJ"),
    ("few", "JJ"),
    ("other", "JJ"),
    ("own", "JJ"),
    ("same", "JJ"),
    ("good", "JJ"),
    ("bad", "JJ"),
    ("new", "JJ"),
    ("old", "JJ"),
    ("big", "JJ"),
    ("small", "JJ"),
    ("better", "JJR"),
    ("worse", "JJR"),
    ("best", "JJS"),
    ("worst", "JJS"),
    // interjections, frequent in transcripts
    ("oh", "UH"),
    ("uh", "UH"),
    ("um", "UH"),
    ("hmm", "UH"),
    ("yeah", "UH"),
    ("yes", "UH"),
    ("okay", "UH"),
    ("ok", "UH"),
    ("wow", "UH"),
    ("hey", "UH"),
    ("hello", "UH"),
    ("hi", "UH"),
    ("ah", "UH"),
    ("huh", "UH"),
    // clitics
    ("'m", "VBP"),
    ("'re", "VBP"),
    ("'ve", "VBP"),
    ("ai", "VBP"),
    // base forms of the auxiliaries
    ("be", "VB"),
    ("have", "VBP"),
    ("do", "VBP"),
    // number words
    ("one", "CD"),
    ("two", "CD"),
    ("three", "CD"),
    ("four", "CD"),
    ("five", "CD"),
    ("six", "CD"),
    ("seven", "CD"),
    ("eight", "CD"),
    ("nine", "CD"),
    ("ten", "CD"),
    ("hundred", "CD"),
    ("thousand", "CD"),
    ("million", "CD"),
    ("billion", "CD"),
];

/// Lower-cased word to treebank tag for every word whose tag does not
/// depend on guessing: closed-class words and irregular verb forms.
pub(crate) fn known() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&str, &str>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut map = inflection::VERBS
            .iter()
            .map(|(form, _, tag)| (*form, *tag))
            .collect::<HashMap<&str, &str>>();

        map.extend(CLOSED_CLASS.iter().copied());
        map
    })
}

#[cfg(test)]
mod tests {
    use super::known;

    #[test]
    fn test_known_closed_class() {
        assert_eq!(known().get("the"), Some(&"DT"));
        assert_eq!(known().get("n't"), Some(&"RB"));
        assert_eq!(known().get("um"), Some(&"UH"));
    }

    #[test]
    fn test_known_irregular_verbs() {
        assert_eq!(known().get("ran"), Some(&"VBD"));
        assert_eq!(known().get("sat"), Some(&"VBD"));
        assert_eq!(known().get("written"), Some(&"VBN"));
    }

    #[test]
    fn test_known_open_class_missing() {
        assert_eq!(known().get("better"), Some(&"JJR"));
        assert_eq!(known().get("flibbertigibbet"), None);
        assert_eq!(known().get("The"), None);
    }
}
