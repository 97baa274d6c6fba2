//! Starter deck content used when no deck file exists yet.

/// `(title, content)` pairs for the seeded sample deck.
pub const SEED_SLIDES: &[(&str, &str)] = &[
    (
        "Welcome",
        "# Slidedeck\n\n## Markdown-Powered Presentations\n\n**Write slides as plain text**\n\n\
         • Titles, sections and subsections\n• Bullet and numbered lists\n• **Bold** and *italic* emphasis\n\n\
         *Navigate with the arrow keys*",
    ),
    (
        "Authoring Syntax",
        "# Authoring Syntax\n\n## The Recognized Subset\n\n\
         - `# ` for the slide title\n- `## ` for section headers\n- `### ` for subsections\n\
         - Dash or bullet markers for lists\n\n1. Numbered lines keep their own index\n2. Each renders as its own item\n\n\
         Anything else is a plain paragraph",
    ),
    (
        "Editing",
        "# Editing Slides\n\n## Raw Text, Rendered Views\n\n\
         **Edit view** shows the slide exactly as typed\n\n\
         • Toggle editing to see the raw markdown\n• The rendered view returns when you leave\n• Thumbnails track every change\n\n\
         *Reorder slides without losing your place*",
    ),
];
