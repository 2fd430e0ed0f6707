// header logo

pub const MEDIBUD_LOGO: &[&str] = &[
    r" __  __          _ _ ___          _ ",
    r"|  \/  | ___  __| (_) _ ) _  _ __| |",
    r"| |\/| |/ -_)/ _` | | _ \ || / _` |",
    r"|_|  |_|\___|\__,_|_|___/\_,_\__,_|",
];
