//! Decorative text blocks. Opaque to the layout code: they are only measured,
//! centered and placed next to panels.

/// Title banner on the main menu.
pub const MAIN_HEADER: &str = r#"╔═════════════════════════════════════════════════════════════════════════════╗
║ █████╗ ███████╗ ██████╗██╗██╗     ██████╗  █████╗ ███╗   ███╗███████╗███████╗
║██╔══██╗██╔════╝██╔════╝██║██║    ██╔════╝ ██╔══██╗████╗ ████║██╔════╝██╔════╝
║███████║███████╗██║     ██║██║    ██║  ███╗███████║██╔████╔██║█████╗  ███████╗
║██╔══██║╚════██║██║     ██║██║    ██║   ██║██╔══██║██║╚██╔╝██║██╔══╝  ╚════██║
║██║  ██║███████║╚██████╗██║██║    ╚██████╔╝██║  ██║██║ ╚═╝ ██║███████╗███████║
║╚═╝  ╚═╝╚══════╝ ╚═════╝╚═╝╚═╝     ╚═════╝ ╚═╝  ╚═╝╚═╝     ╚═╝╚══════╝╚══════╝
║                      -T E R M I N A L   H U B-                              ║
╚═════════════════════════════════════════════════════════════════════════════╝"#;

pub const STORY_HEADER: &str = r#"░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
░░                                           ░░
░░   .---.  _______  .---.  ,---.  .-.   .-. ░░
░░  ( .-._)|__   __|/ .-. ) | .-.\  \ \_/ )/ ░░
░░ (_) \     )| |   | | |(_)| `-'/   \   (_) ░░
░░ _  \ \   (_) |   | | | | |   (     ) (    ░░
░░( `-'  )    | |   \ `-' / | |\ \    | |    ░░
░░ `----'     `-'    )---'  |_| \)\  /(_|    ░░
░░                   (_)         (__)(__)    ░░
░░---------- Dungeons & Dragons -------------░░
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░"#;

pub const ACTION_HEADER: &str = r#"╔══════════════════════════════════════════════════════════╗
║  $$$$$$\   $$$$$$\ $$$$$$$$\ $$$$$$\  $$$$$$\  $$\   $$\ ║
║ $$  __$$\ $$  __$$\__ $$  __|\_$$  _|$$  __$$\ $$$\  $$ |║
║ $$ /  $$ |$$ /  \__|  $$ |     $$ |  $$ /  $$ |$$$$\ $$ |║
║ $$$$$$$$ |$$ |        $$ |     $$ |  $$ |  $$ |$$ $$\$$ |║
║ $$  __$$ |$$ |        $$ |     $$ |  $$ |  $$ |$$ \$$$$ |║
║ $$ |  $$ |$$ |  $$\   $$ |     $$ |  $$ |  $$ |$$ |\$$$ |║
║ $$ |  $$ |\$$$$$$  |  $$ |   $$$$$$\  $$$$$$  |$$ | \$$ |║
║ \__|  \__| \______/   \__|   \______| \______/ \__|  \__|║
║                                                          ║
║ ===================== SHOOT & RUN =======================║
╚══════════════════════════════════════════════════════════╝"#;

pub const BOARDS_HEADER: &str = r#"░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
░░  ___                                      ___             ░░
░░ (   )                                    (   )            ░░
░░  | |.-.    .--.     .---.  ___         .-.| |     .--.    ░░
░░  | /   \  /    \   / .-, \(   )..~,   /   \ |   /  _  \   ░░
░░  |  .-. ||  .-. ; (__) ; | | ' .-. ; |  .-. |  . .' `. ;  ░░
░░  | |  | || |  | |   .'`  | |  / (___)| |  | |  | '   | |  ░░
░░  | |  | || |  | |  / .'| | | |       | |  | |  _\_`.(___) ░░
░░  | |  | || |  | | | /  | | | |       | |  | | (   ). '.   ░░
░░  | '  | || '  | | ; |  ; | | |       | '  | |  | |  `\ |  ░░
░░  ' `-' ; '  `-' / ' `-'  | | |       ' `-'  /  ; '._,' '  ░░
░░   `.__.   `.__.'  `.__.'_.(___)       `.__,'    '.___.'   ░░
░░  ******************* Card & Classics *******************  ░░
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░"#;

/// Side art for the story category.
pub const STORY_ART: &str = r#"     /     \
    ((     ))
===  \_v_//  ===
  ====)_^_(====
  ===/ O O \===
  = | /_ _\ | =
 =   \/_ _\/   =
      \_ _/
      (o_o)
       VwV"#;

pub const ACTION_ART: &str = r#"         __
       _|  |_
     _|      |_
    |  _    _  |
    | |_|  |_| |
 _  |  _    _  |  _
|_|_|_| |__| |_|_|_|
  |_|_        _|_|
    |_|      |_|"#;

pub const BOARDS_ART: &str = r#"   a b c d e f g h
8 │_│#│_│#│_│#│_│#│ 8
7 │#│_│#│_│#│_│#│_│ 7
6 │_│#│_│#│_│#│_│#│ 6
5 │#│_│#│_│#│_│#│_│ 5
4 │_│#│_│#│_│#│_│#│ 4
3 │#│_│#│_│#│_│#│_│ 3
2 │_│#│_│#│_│#│_│#│ 2
1 │#│_│#│_│#│_│#│_│ 1
   a b c d e f g h
  ┌──────────────┐
  │  CHECKMATE   │
  └──────────────┘"#;

/// Shown once on the way out.
pub const FAREWELL: &str = r#"╔══════════════════════════════════════╗
║                                      ║
║         Thanks for playing!          ║
║                                      ║
║             GAME OVER                ║
║                                      ║
╚══════════════════════════════════════╝
                           by ASC11AM0N"#;
