/// Everyone expected to post a daily update.
pub const ROSTER: [&str; 22] = [
    "Cristin Connerney",
    "Logan Ge",
    "Dhiraj Khanal",
    "Iris Cheng",
    "Mateo Godoy",
    "Hongyi Wu",
    "Prashanthi Ramachandran",
    "Morgann Thain",
    "Joshua Shou",
    "Geneva",
    "Sujit Varadhan",
    "Laryn Qi",
    "Edward Kim",
    "Sriyans Rauniyar",
    "Zubin Chandra",
    "Doris Huang",
    "Alex Kim",
    "Mars Tan",
    "Aris Zhu",
    "Brigit Jacob",
    "Jack Rangaiah",
    "Roey Abehsera",
];

pub fn is_roster_member(name: &str) -> bool {
    ROSTER.contains(&name)
}
