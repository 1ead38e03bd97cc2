//! Decorative text art printed around menu output.
//!
//! Nothing here affects menu behavior. Faces and banners are drawn with the
//! menu's own RNG so a seeded session is fully reproducible.

use rand::Rng;

const MONKEY_FACES: &[&str] = &[
    r#"
      🐵
   .-"""-.
  /          \
 |  o      o  |
 |     <>     |
 |   \____/   |
  \          /
   '-.____.-'
"#,
    r#"
    🐒
  .-.   .-.
 /   \ /   \
|  o   o   |
|     <    |
|   \___/  |
 \         /
  '~~~~~'
"#,
    r#"
      🙊
    .-----.
   /       \
  | ^     ^ |
  |    o    |
  |   ___   |
   \       /
    '-----'
"#,
    r#"
      🙈
   ,-.___,-.
  /  (   )  \
 |  o \-/ o  |
 |     V     |
  \  \___/  /
   '-......-'
"#,
    r#"
      🙉
    .------.
   /        \
  | ()    () |
  |     ><   |
  |   \__/   |
   \        /
    '------'
"#,
];

const BANNERS: &[&str] = &[
    r#"
╔═══════════════════════════════════════╗
║          🐵 MONKEY EXPLORER 🐵          ║
║      Discover Amazing Primates!      ║
╚═══════════════════════════════════════╝
"#,
    r#"
████████████████████████████████████████
█          🐒 MONKEY WORLD 🐒           █
█        Your Primate Adventure!       █
████████████████████████████████████████
"#,
];

const SEPARATOR_WIDTH: usize = 50;

/// One of the monkey faces, chosen uniformly.
pub fn random_monkey_face<R: Rng>(rng: &mut R) -> &'static str {
    MONKEY_FACES[rng.random_range(0..MONKEY_FACES.len())]
}

/// One of the start-up banners, chosen uniformly.
pub fn random_banner<R: Rng>(rng: &mut R) -> &'static str {
    BANNERS[rng.random_range(0..BANNERS.len())]
}

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

pub fn menu_decoration() -> String {
    "🌿".repeat(25)
}
