/// Human-readable title for an identifier.
/// - A space goes before every uppercase letter, except the first character,
///   an uppercase letter followed by another uppercase letter, and the last character.
/// - So acronyms stay glued: `LeakyReLUShifted` => `Leaky ReLU Shifted`.
pub fn label(identifier: &str) -> String {
  let chars: Vec<char> = identifier.chars().collect();
  let mut label = String::with_capacity(identifier.len() + 4);

  for (i, &c) in chars.iter().enumerate() {
    let word_boundary = i > 0
      && c.is_uppercase()
      && chars.get(i + 1).map_or(false, |next| !next.is_uppercase());

    if word_boundary { label.push(' '); }
    label.push(c);
  }

  label
}
