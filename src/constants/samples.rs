/// Built-in quotes used by `seed-quotes` when no `SEED_DATA_FILE` is configured.
pub const SAMPLE_QUOTES: [(&str, &str); 25] = [
    ("Simplicity is the soul of efficiency", "Austin Freeman"),
    ("Programs must be written for people to read", "Harold Abelson"),
    ("Talk is cheap. Show me the code", "Linus Torvalds"),
    (
        "Any sufficiently advanced technology is indistinguishable from magic",
        "Arthur C. Clarke",
    ),
    ("The best way to predict the future is to invent it", "Alan Kay"),
    ("Stay hungry, stay foolish.", "Steve Jobs"),
    ("Growth and comfort do not coexist", "Ginni Rometty"),
    ("Technology is best when it brings people together", "Matt Mullenweg"),
    (
        "The technology you use impresses no one. The experience you create with it is everything",
        "Sean Gerety",
    ),
    (
        "The advance of technology is based on making it fit in so that you don't really even notice it, so it's part of everyday life.",
        "Bill Gates",
    ),
    (
        "If you're offered a seat on a rocket ship, don't ask what seat.",
        "Sheryl Sandberg",
    ),
    (
        "You can focus on things that are barriers or you can focus on scaling the wall or redefining the problem",
        "Tim Cook",
    ),
    ("Don't be afraid to change the model", "Reed Hastings"),
    ("Never trust a computer you can't throw out a window", "Steve Wozniak"),
    ("Never let a computer know you're in a hurry", "author unknown"),
    ("Hardware: The parts of a computer system that can be kicked", "Jeff Pesis"),
    (
        "Once a new technology rolls over you, if you're not part of the steamroller, you're part of the road.",
        "Stewart Brand",
    ),
    (
        "If it keeps up, man will atrophy all his limbs but the push-button finger.",
        "Frank Lloyd Wright",
    ),
    (
        "Technology is ruled by two types of people: those who manage what they do not understand, and those who understand what they do not manage.",
        "Mike Trout",
    ),
    (
        "Technology is like a fish. The longer it stays on the shelf, the less desirable it becomes.",
        "Andrew Heller",
    ),
    (
        "I just invent. Then I wait until man comes around to needing what I've invented",
        "R. Buckminster Fuller",
    ),
    ("Computers have lots of memory but no imagination", "author unknown"),
    (
        "People who smile while they are alone used to be called insane until we invented smartphones and social media",
        "Mokokoma Mokhonoana",
    ),
    ("I won't be impressed with technology until I can download food", "author unknown"),
    ("Life was much easier when Apple and Blackberry were just fruits", "author unknown"),
];
