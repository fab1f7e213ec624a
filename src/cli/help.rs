//! Static screens for the interactive shell.

/// The banner printed once at startup.
pub fn welcome_banner() -> &'static str {
    r#"
************************************************
	Welcome to the State Query Engine
************************************************

You can filter your search by the following:

	1. Capital
	2. Population
	3. Region
	4. Governor
	5. Number of Counties
	6. Popular dish
	7. State Bird

Type 'help' to see how to format a query.
"#
}

/// The reference screen printed for the `help` control word.
pub fn help_screen() -> &'static str {
    r#"
The format of the queries you are able to enter is as follows:
>>> [ keyword ] [ logical operator ] [ value ]

+--------------+--------------------------------------+--------------------------+
| Keywords     | Example Query                        | Example Return           |
+--------------+--------------------------------------+--------------------------+
| state        | >>> state == vermont                 | region, capital, etc.    |
| region       | >>> region == northeast              | connecticut, maine, etc. |
| capital      | >>> capital == montpelier            | vermont                  |
| governor     | >>> governor == 'phil scott'         | vermont                  |
| population   | >>> population > 30000000            | california, texas        |
| num_counties | >>> num_counties > 150               | texas, georgia           |
| popular_food | >>> popular_food == 'boiled peanuts' | alabama                  |
| state_bird   | >>> state_bird == 'hermit thrush'    | vermont                  |
+--------------+--------------------------------------+--------------------------+

+--------------------------+--------+---------------------------------------------------+--------------------------+
| Logic Operators          | Symbol | Example Query                                     | Example Return           |
+--------------------------+--------+---------------------------------------------------+--------------------------+
| greater than             | >      | population > 30000000                             | california, texas        |
| less than                | <      | num_counties < 4                                  | delaware                 |
| greater than or equal to | >=     | num_counties >= 250                               | texas                    |
| less than or equal to    | <=     | population <= 600000                              | wyoming                  |
| equal to                 | ==     | region == northeast                               | connecticut, maine, etc. |
| not equal to             | !=     | state_bird != 'hermit thrush'                     | alabama, arkansas, etc.  |
| and                      | &&     | capital == montpelier && governor == 'phil scott' | vermont                  |
+--------------------------+--------+---------------------------------------------------+--------------------------+
"#
}

/// Fixed message for any input the grammar rejects.
pub const PARSE_ERROR_MESSAGE: &str =
    "Error. Could not parse input.\nType 'help' to see how to properly format a query.";

/// Fixed message for any store load or lookup failure.
pub const STORE_ERROR_MESSAGE: &str =
    "Error. Could not retrieve records from the database.\nType 'help' to see how to properly format a query.";

/// Farewell printed on a confirmed exit.
pub const FAREWELL_MESSAGE: &str = "\nThank you for using the State Query System.";
