//! Shared corpus for the integration tests.
//!
//! Each case groups input variants that must produce one normalized form
//! and one fingerprint under every dialect the case lists. The corpus is
//! ported from the reference test suite of the original engine.

// Each test binary uses a different slice of this module.
#![allow(dead_code)]

/// All six dialects, in the order reference fixtures use them.
pub const ALL_DIALECTS: &[&str] = &["mysql", "postgres", "sqlite", "ansi", "mssql", "oracle"];

pub struct Case {
    pub name: &'static str,
    pub dialects: &'static [&'static str],
    pub variants: &'static [&'static str],
}

pub const CASES: &[Case] = &[
    Case {
        name: "basic select / parentheses / semicolon",
        dialects: ALL_DIALECTS,
        variants: &["SELECT 1;", "SELECT (1);"],
    },
    Case {
        name: "columns / comments / whitespace / missing semicolon",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT id, email FROM users;",
            "SELECT id, email FROM users",
            "SELECT id, email /* hello */ FROM users;",
            "SELECT id, /*hello1*/ email /* hello2*/ FROM    users;",
        ],
    },
    Case {
        name: "where eq (values should be normalized)",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users WHERE id = 42;",
            "SELECT * FROM users WHERE id = 324324;",
            "SELECT * FROM users WHERE id = 'bob';",
        ],
    },
    Case {
        name: "boolean + null (case-insensitive)",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users WHERE is_active = TRUE AND deleted_at IS NULL;",
            "SELECT * FROM users WHERE is_active = False AND deleted_at IS null;",
            "SELECT * FROM users WHERE is_active = FALSE AND deleted_at IS Null;",
        ],
    },
    Case {
        name: "parentheses + OR/AND + string variants",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users WHERE (role = 'admin' OR role = 'notstaff') AND is_active = true;",
            "SELECT * FROM users WHERE (role = 'bob' OR role = 'staff') AND is_active = tRue;",
            "SELECT * FROM users WHERE (role = 'john' OR role = 'lead') AND is_active = FaLse;",
        ],
    },
    // Double-quoted strings are string literals only under MySQL semantics;
    // everywhere else `"ignacio"` is a quoted identifier, so this variant
    // joins the class above only for mysql/mariadb.
    Case {
        name: "parentheses + OR/AND + double-quoted strings (mysql)",
        dialects: &["mysql", "mariadb"],
        variants: &[
            "SELECT * FROM users WHERE (role = 'admin' OR role = 'notstaff') AND is_active = true;",
            r#"SELECT * FROM users WHERE (role = "ignacio" OR role = "stuff") AND is_active = TrUe;"#,
        ],
    },
    Case {
        name: "IN list + comments",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users WHERE id IN (1, 2, 3, 4, '5');",
            "SELECT * FROM users WHERE id IN (1, /*2, */ 1234444, 3, 4, 5);",
        ],
    },
    Case {
        name: "NOT IN list + whitespace + comments",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users WHERE id NOT IN (10, 20, 30);",
            "SELECT * FROM users   wheRe id NOT IN (10, 20, '30');",
            "SELECT * FROM   users WHERE id NOT IN (/* great query*/ 10, 1, 30);",
        ],
    },
    Case {
        name: "BETWEEN + date strings",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM events WHERE created_at BETWEEN '2024-01-01' AND '2024-12-31';",
            "SELECT * FROM events WHERE created_at between  '1010-12-13' AND '12-12-12';",
        ],
    },
    Case {
        name: "LIKE patterns",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT a FROM users WHERE email LIKE '%@example.com';",
            "SELECT a FROM users WHERE email LIKE '%@bob%';",
            "SELECT a FROM users WHERE email LIKE '%bob@world-company.com';",
        ],
    },
    Case {
        name: "quoted identifiers (postgres/sqlite only)",
        dialects: &["postgres", "postgresql", "sqlite"],
        variants: &[
            r#"SELECT "User".id, "User".email FROM "User" WHERE "User".id = 1;"#,
            r#"SELECT "User".id, "User".email FROM "User" WHERE "User".id = 123;"#,
        ],
    },
    Case {
        name: "order_by_+_limit",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT id FROM users ORDER BY id LIMIT 10;",
            "SELECT id FROM users ORDER BY id ASC LIMIT 10;",
            "SELECT id FROM users ORDER BY id LIMIT 00010;",
        ],
    },
    Case {
        name: "order by + offset + limit",
        dialects: &["postgres", "postgresql", "sqlite"],
        variants: &[
            "SELECT id FROM users ORDER BY id LIMIT 10 OFFSET 20;",
            "SELECT id FROM users ORDER BY id ASC LIMIT 10 OFFSET 20;",
            "SELECT id FROM users ORDER BY id LIMIT 00010 OFFSET 00020;",
        ],
    },
    Case {
        name: "order by + limit offset (mysql style)",
        dialects: &["mysql", "mariadb", "sqlite"],
        variants: &[
            "SELECT id FROM users ORDER BY id LIMIT 20, 10;",
            "SELECT id FROM users ORDER BY id ASC LIMIT 20, 10;",
            "SELECT id FROM users ORDER BY id LIMIT 00020, 00010;",
        ],
    },
    Case {
        name: "distinct",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT DISTINCT email FROM users;",
            "SELECT distinct email FROM users;",
            "SELECT DISTINCT(email) FROM users;",
        ],
    },
    Case {
        name: "table alias with AS",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT u.id FROM users AS u;",
            "SELECT u.id FROM users u;",
        ],
    },
    Case {
        name: "column alias with AS",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT id AS user_id FROM users;",
            "SELECT id user_id FROM users;",
        ],
    },
    Case {
        name: "multiple aliases",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT u.id AS uid, u.email AS mail FROM users u;",
            "SELECT u.id uid, u.email mail FROM users AS u;",
        ],
    },
    Case {
        name: "inner join basic",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT u.id, o.id FROM users u JOIN orders o ON o.user_id = u.id;",
            "SELECT u.id, o.id FROM users AS u INNER JOIN orders AS o ON o.user_id = u.id;",
        ],
    },
    Case {
        name: "left join",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT u.id, p.bio FROM users u LEFT JOIN profiles p ON p.user_id = u.id;",
            "SELECT u.id, p.bio FROM users u LEFT OUTER JOIN profiles p ON p.user_id = u.id;",
        ],
    },
    Case {
        name: "join_with_multiple_conditions",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM a JOIN b ON a.id = b.a_id AND b.is_active = TRUE;",
            "SELECT * FROM a JOIN b ON (a.id = b.a_id) AND (b.is_active = true);",
        ],
    },
    Case {
        name: "join using",
        dialects: &["postgres", "postgresql", "mysql", "mariadb", "sqlite"],
        variants: &[
            "SELECT * FROM users JOIN orders USING (user_id);",
            "SELECT * FROM users INNER JOIN orders USING (user_id);",
        ],
    },
    Case {
        name: "group by basic count star",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT user_id, COUNT(*) FROM orders GROUP BY user_id;",
            "SELECT user_id, count(*) FROM orders GROUP BY user_id;",
            "SELECT user_id, COUNT( * ) FROM orders GROUP BY user_id;",
        ],
    },
    Case {
        name: "group by basic count literal",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT user_id, COUNT(1) FROM orders GROUP BY user_id;",
            "SELECT user_id, count(999) FROM orders GROUP BY user_id;",
            "SELECT user_id, COUNT('x') FROM orders GROUP BY user_id;",
        ],
    },
    Case {
        name: "group by + having",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT user_id, COUNT(*) c FROM orders GROUP BY user_id HAVING COUNT(*) > 10;",
            "SELECT user_id, count( * ) AS c FROM orders GROUP BY user_id HAVING count( * ) > 10;",
        ],
    },
    Case {
        name: "subquery in where",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users WHERE id IN (SELECT user_id FROM orders);",
            "SELECT * FROM users WHERE id IN ( SELECT user_id FROM orders );",
            "SELECT * FROM users WHERE id IN (SELECT user_id FROM orders /*hello*/);",
        ],
    },
    Case {
        name: "exists subquery",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users u WHERE EXISTS (SELECT 1 FROM orders o WHERE o.user_id = u.id);",
            "SELECT * FROM users u WHERE exists (SELECT 1 FROM orders o WHERE (o.user_id = u.id));",
        ],
    },
    Case {
        name: "not exists subquery",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users u WHERE NOT EXISTS (SELECT 1 FROM orders o WHERE o.user_id = u.id);",
            "SELECT * FROM users u WHERE not exists (SELECT 1 FROM orders o WHERE (o.user_id = u.id));",
        ],
    },
    Case {
        name: "union",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT id FROM users UNION SELECT id FROM admins;",
            "SELECT id FROM users union seLecT id FRoM admins;",
        ],
    },
    Case {
        name: "union all",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT id FROM users UNION ALL SELECT id FROM admins;",
            "SELECT id  FROM users UNION ALL SELECT id FROM admins",
        ],
    },
    Case {
        name: "case when basic",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT CASE WHEN is_active = TRUE THEN 1 ELSE 0 END FROM users;",
            "SELECT CASE WHEN is_active = true THEN 1 ELSE 0 END FROM users;",
        ],
    },
    Case {
        name: "case when with alias",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT CASE WHEN role = 'admin' THEN 'A' ELSE 'U' END AS kind FROM users;",
            "SELECT CASE WHEN role = 'bob' THEN 'A' ELSE 'U' END kind FROM users;",
        ],
    },
    Case {
        name: "coalesce",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT COALESCE(email, 'none') FROM users;",
            "SELECT coalesce(email, 'x') FROM users;",
        ],
    },
    Case {
        name: "lower/upper",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT LOWER(email) FROM users;",
            "SELECT lower(email) FROM users;",
        ],
    },
    Case {
        name: "concat",
        dialects: &["mysql", "mariadb", "postgres", "postgresql", "sqlite"],
        variants: &[
            "SELECT CONCAT(first_name, ' ', last_name) FROM users;",
            "SELECT concat(first_name, ' ', last_name) FROM users;",
        ],
    },
    Case {
        name: "cast standard",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT CAST(id AS TEXT) FROM users;",
            "SELECT cast(id AS text) FROM users;",
        ],
    },
    Case {
        name: "postgres cast operator ::",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT id::text FROM users;",
            "SELECT (id)::text FROM users;",
        ],
    },
    Case {
        name: "cte basic",
        dialects: ALL_DIALECTS,
        variants: &[
            "WITH u AS (SELECT id FROM users) SELECT * FROM u;",
            "WITH u AS (SELECT id FROM users) SELECT * FROM u",
        ],
    },
    Case {
        name: "cte with multiple",
        dialects: ALL_DIALECTS,
        variants: &[
            "WITH u AS (SELECT id FROM users), o AS (SELECT user_id FROM orders) SELECT * FROM u JOIN o ON o.user_id = u.id;",
            "WITH u AS (SELECT id FROM users), o AS (SELECT user_id FROM orders) SELECT * FROM u INNER JOIN o ON o.user_id = u.id;",
        ],
    },
    Case {
        name: "window row_number",
        dialects: &["postgres", "postgresql", "mysql", "mariadb", "sqlite"],
        variants: &[
            "SELECT ROW_NUMBER() OVER (ORDER BY id) FROM users;",
            "SELECT row_number() OVER (ORDER BY id ASC) FROM users;",
        ],
    },
    Case {
        name: "window partition by",
        dialects: &["postgres", "postgresql", "mysql", "mariadb", "sqlite"],
        variants: &[
            "SELECT COUNT( 1 ) OVER (PARTITION BY user_id) FROM orders;",
            "SELECT count(1) OVER (PARTITION BY user_id) FROM orders;",
        ],
    },
    Case {
        name: "insert values",
        dialects: ALL_DIALECTS,
        variants: &[
            "INSERT INTO users (id, email) VALUES (1, 'a@example.com');",
            "INSERT INTO users (id, email) VALUES (123, 'b@example.com');",
        ],
    },
    Case {
        name: "insert default values",
        dialects: &["postgres", "postgresql", "sqlite", "mysql", "mariadb"],
        variants: &[
            "INSERT INTO users DEFAULT VALUES;",
            "INSERT INTO users DEFAULT VALUES",
        ],
    },
    Case {
        name: "update set",
        dialects: ALL_DIALECTS,
        variants: &[
            "UPDATE users SET email = 'a@example.com' WHERE id = 1;",
            "UPDATE users SET email = 'b@example.com' WHERE id = 2;",
        ],
    },
    Case {
        name: "delete where",
        dialects: ALL_DIALECTS,
        variants: &[
            "DELETE FROM users WHERE id = 1;",
            "DELETE FROM users WHERE id = 2;",
        ],
    },
    Case {
        name: "mysql backtick identifiers",
        dialects: &["mysql", "mariadb"],
        variants: &[
            "SELECT `User`.id, `User`.email FROM `User` WHERE `User`.id = 1;",
            "SELECT `User`.id, `User`.email FROM `User` WHERE `User`.id = 123;",
        ],
    },
    Case {
        name: "line comments",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT id FROM users -- hello\nWHERE id = 1;",
            "SELECT id FROM users -- hello\nWHERE id = 123;",
        ],
    },
    Case {
        name: "block comments",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT id /* hello */ FROM users WHERE id = 1;",
            "SELECT id /* hello */ FROM users WHERE id = 123;",
        ],
    },
];

pub const HARD_CASES: &[Case] = &[
    Case {
        name: "order by position",
        dialects: &["postgres", "postgresql", "mysql", "mariadb", "sqlite"],
        variants: &[
            "SELECT id, email FROM users ORDER BY 1;",
            "SELECT id, email FROM users ORDER BY 1 ASC;",
        ],
    },
    Case {
        name: "group by position",
        dialects: &["postgres", "postgresql", "mysql", "mariadb", "sqlite"],
        variants: &[
            "SELECT user_id, COUNT(*) FROM orders GROUP BY 1;",
            "SELECT user_id, COUNT(*) FROM orders GROUP BY 1;",
        ],
    },
    Case {
        name: "order by nulls last postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT id FROM users ORDER BY last_login NULLS LAST;",
            "SELECT id FROM users ORDER BY last_login ASC NULLS LAST;",
        ],
    },
    Case {
        name: "order by nulls first postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT id FROM users ORDER BY last_login NULLS FIRST;",
            "SELECT id FROM users ORDER BY last_login ASC NULLS FIRST;",
        ],
    },
    Case {
        name: "ilike postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT * FROM users WHERE email ILIKE '%@example.com';",
            "SELECT * FROM users WHERE email ilike '%@bob%';",
        ],
    },
    Case {
        name: "distinct on postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT DISTINCT ON (user_id) user_id, created_at FROM orders ORDER BY user_id, created_at DESC;",
            "SELECT DISTINCT ON(user_id) user_id, created_at FROM orders ORDER BY user_id, created_at DESC;",
        ],
    },
    Case {
        name: "insert returning postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "INSERT INTO users (email) VALUES ('a@example.com') RETURNING id;",
            "INSERT INTO users (email) VALUES ('b@example.com') RETURNING id;",
        ],
    },
    Case {
        name: "update returning postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "UPDATE users SET email = 'a@example.com' WHERE id = 1 RETURNING id;",
            "UPDATE users SET email = 'b@example.com' WHERE id = 2 RETURNING id;",
        ],
    },
    Case {
        name: "delete returning postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "DELETE FROM users WHERE id = 1 RETURNING id;",
            "DELETE FROM users WHERE id = 2 RETURNING id;",
        ],
    },
    Case {
        name: "update from postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "UPDATE users u SET email = o.email FROM orders o WHERE o.user_id = u.id;",
            "UPDATE users AS u SET email = o.email FROM orders AS o WHERE o.user_id = u.id;",
        ],
    },
    Case {
        name: "insert on conflict do nothing postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "INSERT INTO users (email) VALUES ('a@example.com') ON CONFLICT DO NOTHING;",
            "INSERT INTO users (email) VALUES ('b@example.com') ON CONFLICT DO NOTHING;",
        ],
    },
    Case {
        name: "insert on conflict do update postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "INSERT INTO users (id, email) VALUES (1, 'a@example.com') ON CONFLICT (id) DO UPDATE SET email = EXCLUDED.email;",
            "INSERT INTO users (id, email) VALUES (2, 'b@example.com') ON CONFLICT (id) DO UPDATE SET email = EXCLUDED.email;",
        ],
    },
    Case {
        name: "mysql on duplicate key update",
        dialects: &["mysql", "mariadb"],
        variants: &[
            "INSERT INTO users (id, email) VALUES (1, 'a@example.com') ON DUPLICATE KEY UPDATE email = VALUES(email);",
            "INSERT INTO users (id, email) VALUES (2, 'b@example.com') ON DUPLICATE KEY UPDATE email = VALUES(email);",
        ],
    },
    Case {
        name: "mysql insert ignore",
        dialects: &["mysql", "mariadb"],
        variants: &[
            "INSERT IGNORE INTO users (id, email) VALUES (1, 'a@example.com');",
            "INSERT IGNORE INTO users (id, email) VALUES (2, 'b@example.com');",
        ],
    },
    Case {
        name: "mysql replace into",
        dialects: &["mysql", "mariadb"],
        variants: &[
            "REPLACE INTO users (id, email) VALUES (1, 'a@example.com');",
            "REPLACE INTO users (id, email) VALUES (2, 'b@example.com');",
        ],
    },
    Case {
        name: "postgres json extract operator",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT payload->>'email' FROM events;",
            "SELECT payload ->> 'email' FROM events;",
        ],
    },
    Case {
        name: "postgres json nested operator",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT payload->'user'->>'id' FROM events;",
            "SELECT payload -> 'user' ->> 'id' FROM events;",
        ],
    },
    Case {
        name: "mysql json_extract",
        dialects: &["mysql", "mariadb"],
        variants: &[
            "SELECT JSON_EXTRACT(payload, '$.user.id') FROM events;",
            "SELECT json_extract(payload, '$.user.id') FROM events;",
        ],
    },
    Case {
        name: "mysql json_unquote",
        dialects: &["mysql", "mariadb"],
        variants: &[
            "SELECT JSON_UNQUOTE(JSON_EXTRACT(payload, '$.email')) FROM events;",
            "SELECT json_unquote(json_extract(payload, '$.email')) FROM events;",
        ],
    },
    Case {
        name: "mysql regexp",
        dialects: &["mysql", "mariadb"],
        variants: &[
            r"SELECT * FROM users WHERE email REGEXP '.*@example\.com$';",
            r"SELECT * FROM users WHERE email regexp '.*@bob\.com$';",
        ],
    },
    Case {
        name: "sqlite limit offset",
        dialects: &["sqlite"],
        variants: &[
            "SELECT id FROM users ORDER BY id LIMIT 10 OFFSET 20;",
            "SELECT id FROM users ORDER BY id ASC LIMIT 10 OFFSET 20;",
        ],
    },
    Case {
        name: "with recursive",
        dialects: &["postgres", "postgresql", "sqlite", "mysql", "mariadb"],
        variants: &[
            "WITH RECURSIVE t(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM t WHERE n < 5) SELECT * FROM t;",
            "WITH RECURSIVE t(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM t WHERE n < 10) SELECT * FROM t;",
        ],
    },
    Case {
        name: "exists correlated",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users u WHERE EXISTS (SELECT 1 FROM orders o WHERE o.user_id = u.id AND o.total > 0);",
            "SELECT * FROM users u WHERE EXISTS (SELECT 1 FROM orders o WHERE o.user_id = u.id AND o.total > 999);",
        ],
    },
    Case {
        name: "row value in",
        dialects: &["postgres", "postgresql", "mysql", "mariadb", "sqlite"],
        variants: &[
            "SELECT * FROM t WHERE (a, b) IN ((1, 2), (3, 4));",
            "SELECT * FROM t WHERE (a, b) IN ((9, 8), (7, 6));",
        ],
    },
    Case {
        name: "cast to int",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT CAST(id AS INTEGER) FROM users;",
            "SELECT cast(id as integer) FROM users;",
        ],
    },
    Case {
        name: "cast to timestamp",
        dialects: &["postgres", "postgresql", "mysql", "mariadb", "sqlite"],
        variants: &[
            "SELECT CAST(created_at AS TIMESTAMP) FROM events;",
            "SELECT cast(created_at as timestamp) FROM events;",
        ],
    },
    Case {
        name: "postgres cast uuid",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT id::uuid FROM users;",
            "SELECT (id)::uuid FROM users;",
        ],
    },
    Case {
        name: "postgres cast timestamptz",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT created_at::timestamptz FROM events;",
            "SELECT (created_at)::timestamptz FROM events;",
        ],
    },
    Case {
        name: "postgres any",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT * FROM users WHERE id = ANY(ARRAY[1,2,3]);",
            "SELECT * FROM users WHERE id = ANY(ARRAY[9,8,7]);",
        ],
    },
    Case {
        name: "mysql if expression",
        dialects: &["mysql", "mariadb"],
        variants: &[
            "SELECT IF(is_active, 1, 0) FROM users;",
            "SELECT if(is_active, 1, 0) FROM users;",
        ],
    },
    Case {
        name: "coalesce multiple args",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT COALESCE(a, b, c, 'x') FROM t;",
            "SELECT coalesce(a, b, c, 'y') FROM t;",
        ],
    },
    Case {
        name: "having aggregate",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT user_id, COUNT(*) FROM orders GROUP BY user_id HAVING COUNT(*) >= 10;",
            "SELECT user_id, COUNT(*) FROM orders GROUP BY user_id HAVING COUNT(*) >= 999;",
        ],
    },
    Case {
        name: "nested parentheses comparisons",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users WHERE (((id = 1)));",
            "SELECT * FROM users WHERE ((id = 999));",
        ],
    },
    Case {
        name: "arithmetic expressions",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT (price * quantity) + tax FROM orders;",
            "SELECT ((price * quantity) + tax) FROM orders;",
        ],
    },
    Case {
        name: "is distinct from postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT * FROM users WHERE email IS DISTINCT FROM 'a@example.com';",
            "SELECT * FROM users WHERE email IS DISTINCT FROM 'b@example.com';",
        ],
    },
    Case {
        name: "aggregate filter postgres",
        dialects: &["postgres", "postgresql"],
        variants: &[
            "SELECT COUNT(*) FILTER (WHERE is_active = TRUE) FROM users;",
            "SELECT COUNT(*) FILTER (WHERE is_active = FALSE) FROM users;",
        ],
    },
    Case {
        name: "cross join",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM users CROSS JOIN roles;",
            "SELECT  *  FROM users CROSS JOIN roles;",
        ],
    },
    Case {
        name: "schema qualified names",
        dialects: ALL_DIALECTS,
        variants: &[
            "SELECT * FROM public.users;",
            "SELECT * FROM public.users",
        ],
    },
    Case {
        name: "postgres quoted schema table",
        dialects: &["postgres", "postgresql", "sqlite"],
        variants: &[
            r#"SELECT * FROM "public"."User";"#,
            r#"SELECT  *  FROM "public"."User";"#,
        ],
    },
];

pub const ORM_CASES: &[Case] = &[
    Case {
        name: "orm postgres huge select with many aliases",
        dialects: &["postgres", "postgresql"],
        variants: &[
            r#"
            SELECT
                "auth_user"."id" AS "col1",
                "auth_user"."password" AS "col2",
                "auth_user"."last_login" AS "col3",
                "auth_user"."is_superuser" AS "col4",
                "auth_user"."username" AS "col5",
                "auth_user"."email" AS "col6",
                "profile_profile"."id" AS "col7",
                "profile_profile"."user_id" AS "col8",
                "profile_profile"."company" AS "col9"
            FROM "auth_user"
            LEFT OUTER JOIN "profile_profile"
                ON ("profile_profile"."user_id" = "auth_user"."id")
            WHERE
                ("auth_user"."is_active" = TRUE)
                AND ("auth_user"."email" ILIKE '%@example.com')
            ORDER BY "auth_user"."id" ASC
            LIMIT 50 OFFSET 100;
            "#,
            r#"
            SELECT
                "auth_user"."id" AS "col1",
                "auth_user"."password" AS "col2",
                "auth_user"."last_login" AS "col3",
                "auth_user"."is_superuser" AS "col4",
                "auth_user"."username" AS "col5",
                "auth_user"."email" AS "col6",
                "profile_profile"."id" AS "col7",
                "profile_profile"."user_id" AS "col8",
                "profile_profile"."company" AS "col9"
            FROM "auth_user"
            LEFT OUTER JOIN "profile_profile"
                ON ("profile_profile"."user_id" = "auth_user"."id")
            WHERE
                ("auth_user"."is_active" = FALSE)
                AND ("auth_user"."email" ILIKE '%@bob.com')
            ORDER BY "auth_user"."id"
            LIMIT 50 OFFSET 100;
            "#,
        ],
    },
    Case {
        name: "orm postgres correlated subquery exists",
        dialects: &["postgres", "postgresql"],
        variants: &[
            r#"
            SELECT
                "auth_user"."id" AS "col1",
                "auth_user"."email" AS "col2"
            FROM "auth_user"
            WHERE EXISTS (
                SELECT 1
                FROM "shop_order"
                WHERE
                    ("shop_order"."user_id" = "auth_user"."id")
                    AND ("shop_order"."status" = 'paid')
                    AND ("shop_order"."total_cents" > 0)
            )
            ORDER BY "auth_user"."id" ASC
            LIMIT 100;
            "#,
            r#"
            SELECT
                "auth_user"."id" AS "col1",
                "auth_user"."email" AS "col2"
            FROM "auth_user"
            WHERE EXISTS (
                SELECT 1
                FROM "shop_order"
                WHERE
                    ("shop_order"."user_id" = "auth_user"."id")
                    AND ("shop_order"."status" = 'paid')
                    AND ("shop_order"."total_cents" > 999999)
            )
            ORDER BY "auth_user"."id"
            LIMIT 100;
            "#,
        ],
    },
    Case {
        name: "orm postgres json extract in where",
        dialects: &["postgres", "postgresql"],
        variants: &[
            r#"
            SELECT
                "events_event"."id" AS "col1",
                "events_event"."payload" AS "col2"
            FROM "events_event"
            WHERE
                ("events_event"."payload"->>'kind' = 'payment')
                AND ("events_event"."payload"->'user'->>'id' = '123')
            ORDER BY "events_event"."created_at" DESC
            LIMIT 500;
            "#,
            r#"
            SELECT
                "events_event"."id" AS "col1",
                "events_event"."payload" AS "col2"
            FROM "events_event"
            WHERE
                ("events_event"."payload"->>'kind' = 'refund')
                AND ("events_event"."payload"->'user'->>'id' = '999')
            ORDER BY "events_event"."created_at" DESC
            LIMIT 500;
            "#,
        ],
    },
    Case {
        name: "orm postgres cte + join + aggregation",
        dialects: &["postgres", "postgresql"],
        variants: &[
            r#"
            WITH "recent_orders" AS (
                SELECT
                    "shop_order"."id" AS "id",
                    "shop_order"."user_id" AS "user_id",
                    "shop_order"."total_cents" AS "total_cents"
                FROM "shop_order"
                WHERE
                    ("shop_order"."created_at" >= '2024-01-01')
                    AND ("shop_order"."status" IN ('paid', 'shipped'))
            )
            SELECT
                "recent_orders"."user_id" AS "col1",
                COUNT(*) AS "col2",
                SUM("recent_orders"."total_cents") AS "col3"
            FROM "recent_orders"
            GROUP BY "recent_orders"."user_id"
            HAVING COUNT(*) >= 10
            ORDER BY SUM("recent_orders"."total_cents") DESC
            LIMIT 100;
            "#,
            r#"
            WITH "recent_orders" AS (
                SELECT
                    "shop_order"."id" AS "id",
                    "shop_order"."user_id" AS "user_id",
                    "shop_order"."total_cents" AS "total_cents"
                FROM "shop_order"
                WHERE
                    ("shop_order"."created_at" >= '2000-01-01')
                    AND ("shop_order"."status" IN ('paid', 'shipped'))
            )
            SELECT
                "recent_orders"."user_id" AS "col1",
                COUNT(*) AS "col2",
                SUM("recent_orders"."total_cents") AS "col3"
            FROM "recent_orders"
            GROUP BY "recent_orders"."user_id"
            HAVING COUNT(*) >= 999
            ORDER BY SUM("recent_orders"."total_cents") DESC
            LIMIT 100;
            "#,
        ],
    },
    Case {
        name: "orm postgres update returning",
        dialects: &["postgres", "postgresql"],
        variants: &[
            r#"
            UPDATE "profile_profile"
            SET "timezone" = 'Europe/Paris', "updated_at" = NOW()
            WHERE ("profile_profile"."user_id" = 123)
            RETURNING "profile_profile"."id", "profile_profile"."user_id";
            "#,
            r#"
            UPDATE "profile_profile"
            SET "timezone" = 'America/New_York', "updated_at" = NOW()
            WHERE ("profile_profile"."user_id" = 999)
            RETURNING "profile_profile"."id", "profile_profile"."user_id";
            "#,
        ],
    },
    Case {
        name: "orm postgres window function over partition",
        dialects: &["postgres", "postgresql"],
        variants: &[
            r#"
            SELECT
                "shop_order"."user_id" AS "col1",
                ROW_NUMBER() OVER (PARTITION BY "shop_order"."user_id" ORDER BY "shop_order"."created_at" DESC) AS "col2"
            FROM "shop_order"
            WHERE "shop_order"."status" = 'paid'
            ORDER BY "shop_order"."user_id" ASC, "shop_order"."created_at" DESC
            LIMIT 500;
            "#,
            r#"
            SELECT
                "shop_order"."user_id" AS "col1",
                ROW_NUMBER() OVER (PARTITION BY "shop_order"."user_id" ORDER BY "shop_order"."created_at" DESC) AS "col2"
            FROM "shop_order"
            WHERE "shop_order"."status" = 'shipped'
            ORDER BY "shop_order"."user_id", "shop_order"."created_at" DESC
            LIMIT 500;
            "#,
        ],
    },
    Case {
        name: "orm mysql deep joins + order by",
        dialects: &["mysql", "mariadb"],
        variants: &[
            r#"
            SELECT
                `shop_order`.`id` AS `col1`,
                `shop_order`.`user_id` AS `col2`,
                `shop_orderitem`.`id` AS `col3`,
                `catalog_product`.`sku` AS `col4`
            FROM `shop_order`
            INNER JOIN `shop_orderitem`
                ON (`shop_orderitem`.`order_id` = `shop_order`.`id`)
            INNER JOIN `catalog_product`
                ON (`catalog_product`.`id` = `shop_orderitem`.`product_id`)
            WHERE
                (`shop_order`.`user_id` = 123)
                AND (`shop_order`.`status` IN ('paid', 'shipped', 'delivered'))
            ORDER BY `shop_order`.`created_at` DESC, `shop_order`.`id` DESC
            LIMIT 200;
            "#,
            r#"
            SELECT
                `shop_order`.`id` AS `col1`,
                `shop_order`.`user_id` AS `col2`,
                `shop_orderitem`.`id` AS `col3`,
                `catalog_product`.`sku` AS `col4`
            FROM `shop_order`
            INNER JOIN `shop_orderitem`
                ON (`shop_orderitem`.`order_id` = `shop_order`.`id`)
            INNER JOIN `catalog_product`
                ON (`catalog_product`.`id` = `shop_orderitem`.`product_id`)
            WHERE
                (`shop_order`.`user_id` = 999999)
                AND (`shop_order`.`status` IN ('paid', 'shipped', 'delivered'))
            ORDER BY `shop_order`.`created_at` DESC, `shop_order`.`id` DESC
            LIMIT 200;
            "#,
        ],
    },
    Case {
        name: "orm mysql json_extract where",
        dialects: &["mysql", "mariadb"],
        variants: &[
            r#"
            SELECT
                `events_event`.`id` AS `col1`,
                `events_event`.`payload` AS `col2`
            FROM `events_event`
            WHERE
                (JSON_EXTRACT(`events_event`.`payload`, '$.kind') = 'payment')
                AND (JSON_EXTRACT(`events_event`.`payload`, '$.user.id') = '123')
            ORDER BY `events_event`.`created_at` DESC
            LIMIT 500;
            "#,
            r#"
            SELECT
                `events_event`.`id` AS `col1`,
                `events_event`.`payload` AS `col2`
            FROM `events_event`
            WHERE
                (JSON_EXTRACT(`events_event`.`payload`, '$.kind') = 'refund')
                AND (JSON_EXTRACT(`events_event`.`payload`, '$.user.id') = '999')
            ORDER BY `events_event`.`created_at` DESC
            LIMIT 500;
            "#,
        ],
    },
    Case {
        name: "orm mysql insert on duplicate key update",
        dialects: &["mysql", "mariadb"],
        variants: &[
            r#"
            INSERT INTO `profile_profile` (`user_id`, `company`, `job_title`)
            VALUES (123, 'Acme', 'Engineer')
            ON DUPLICATE KEY UPDATE `company` = VALUES(`company`), `job_title` = VALUES(`job_title`);
            "#,
            r#"
            INSERT INTO `profile_profile` (`user_id`, `company`, `job_title`)
            VALUES (999, 'Globex', 'CTO')
            ON DUPLICATE KEY UPDATE `company` = VALUES(`company`), `job_title` = VALUES(`job_title`);
            "#,
        ],
    },
    Case {
        name: "orm mysql huge in list",
        dialects: &["mysql", "mariadb"],
        variants: &[
            r#"
            SELECT `auth_user`.`id`, `auth_user`.`email`
            FROM `auth_user`
            WHERE `auth_user`.`id` IN (1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20)
            ORDER BY `auth_user`.`id` ASC;
            "#,
            r#"
            SELECT `auth_user`.`id`, `auth_user`.`email`
            FROM `auth_user`
            WHERE `auth_user`.`id` IN (101,102,103,104,105,106,107,108,109,110,111,112,113,114,115,116,117,118,119,120)
            ORDER BY `auth_user`.`id`;
            "#,
        ],
    },
    Case {
        name: "orm sqlite correlated exists",
        dialects: &["sqlite"],
        variants: &[
            r#"
            SELECT
                "auth_user"."id" AS "col1",
                "auth_user"."email" AS "col2"
            FROM "auth_user"
            WHERE EXISTS (
                SELECT 1
                FROM "shop_order"
                WHERE
                    ("shop_order"."user_id" = "auth_user"."id")
                    AND ("shop_order"."status" = 'paid')
                    AND ("shop_order"."total_cents" > 0)
            )
            ORDER BY "auth_user"."id" ASC
            LIMIT 100;
            "#,
            r#"
            SELECT
                "auth_user"."id" AS "col1",
                "auth_user"."email" AS "col2"
            FROM "auth_user"
            WHERE EXISTS (
                SELECT 1
                FROM "shop_order"
                WHERE
                    ("shop_order"."user_id" = "auth_user"."id")
                    AND ("shop_order"."status" = 'paid')
                    AND ("shop_order"."total_cents" > 999999)
            )
            ORDER BY "auth_user"."id"
            LIMIT 100;
            "#,
        ],
    },
    Case {
        name: "orm oracle huge select with many columns and aliases",
        dialects: &["oracle"],
        variants: &[
            r#"
            SELECT
                "AUTH_USER"."ID" AS "COL1",
                "AUTH_USER"."USERNAME" AS "COL2",
                "AUTH_USER"."EMAIL" AS "COL3",
                "PROFILE_PROFILE"."COMPANY" AS "COL4"
            FROM "AUTH_USER"
            LEFT OUTER JOIN "PROFILE_PROFILE"
                ON ("PROFILE_PROFILE"."USER_ID" = "AUTH_USER"."ID")
            WHERE
                ("AUTH_USER"."IS_ACTIVE" = 1)
                AND ("AUTH_USER"."EMAIL" LIKE '%@example.com')
            ORDER BY "AUTH_USER"."ID" ASC
            OFFSET 100 ROWS FETCH FIRST 50 ROWS ONLY
            "#,
            r#"
            SELECT
                "AUTH_USER"."ID" AS "COL1",
                "AUTH_USER"."USERNAME" AS "COL2",
                "AUTH_USER"."EMAIL" AS "COL3",
                "PROFILE_PROFILE"."COMPANY" AS "COL4"
            FROM "AUTH_USER"
            LEFT OUTER JOIN "PROFILE_PROFILE"
                ON ("PROFILE_PROFILE"."USER_ID" = "AUTH_USER"."ID")
            WHERE
                ("AUTH_USER"."IS_ACTIVE" = 0)
                AND ("AUTH_USER"."EMAIL" LIKE '%@bob.com')
            ORDER BY "AUTH_USER"."ID"
            OFFSET 100 ROWS FETCH FIRST 50 ROWS ONLY
            "#,
        ],
    },
    Case {
        name: "orm oracle cte aggregation",
        dialects: &["oracle"],
        variants: &[
            r#"
            WITH "RECENT_ORDERS" AS (
                SELECT
                    "SHOP_ORDER"."ID" AS "ID",
                    "SHOP_ORDER"."USER_ID" AS "USER_ID",
                    "SHOP_ORDER"."TOTAL_CENTS" AS "TOTAL_CENTS"
                FROM "SHOP_ORDER"
                WHERE
                    ("SHOP_ORDER"."CREATED_AT" >= TO_DATE('2024-01-01', 'YYYY-MM-DD'))
                    AND ("SHOP_ORDER"."STATUS" IN ('paid', 'shipped'))
            )
            SELECT
                "RECENT_ORDERS"."USER_ID" AS "COL1",
                COUNT(*) AS "COL2",
                SUM("RECENT_ORDERS"."TOTAL_CENTS") AS "COL3"
            FROM "RECENT_ORDERS"
            GROUP BY "RECENT_ORDERS"."USER_ID"
            HAVING COUNT(*) >= 10
            ORDER BY SUM("RECENT_ORDERS"."TOTAL_CENTS") DESC
            FETCH FIRST 100 ROWS ONLY
            "#,
            r#"
            WITH "RECENT_ORDERS" AS (
                SELECT
                    "SHOP_ORDER"."ID" AS "ID",
                    "SHOP_ORDER"."USER_ID" AS "USER_ID",
                    "SHOP_ORDER"."TOTAL_CENTS" AS "TOTAL_CENTS"
                FROM "SHOP_ORDER"
                WHERE
                    ("SHOP_ORDER"."CREATED_AT" >= TO_DATE('2000-01-01', 'YYYY-MM-DD'))
                    AND ("SHOP_ORDER"."STATUS" IN ('paid', 'shipped'))
            )
            SELECT
                "RECENT_ORDERS"."USER_ID" AS "COL1",
                COUNT(*) AS "COL2",
                SUM("RECENT_ORDERS"."TOTAL_CENTS") AS "COL3"
            FROM "RECENT_ORDERS"
            GROUP BY "RECENT_ORDERS"."USER_ID"
            HAVING COUNT(*) >= 999
            ORDER BY SUM("RECENT_ORDERS"."TOTAL_CENTS") DESC
            FETCH FIRST 100 ROWS ONLY
            "#,
        ],
    },
    Case {
        name: "orm oracle rownum pagination legacy",
        dialects: &["oracle"],
        variants: &[
            r#"
            SELECT * FROM (
                SELECT
                    "AUTH_USER"."ID" AS "COL1",
                    "AUTH_USER"."EMAIL" AS "COL2"
                FROM "AUTH_USER"
                WHERE ("AUTH_USER"."IS_ACTIVE" = 1)
                ORDER BY "AUTH_USER"."ID" ASC
            ) WHERE ROWNUM <= 100
            "#,
            r#"
            SELECT * FROM (
                SELECT
                    "AUTH_USER"."ID" AS "COL1",
                    "AUTH_USER"."EMAIL" AS "COL2"
                FROM "AUTH_USER"
                WHERE ("AUTH_USER"."IS_ACTIVE" = 0)
                ORDER BY "AUTH_USER"."ID" ASC
            ) WHERE ROWNUM <= 100
            "#,
        ],
    },
    Case {
        name: "orm oracle sysdate usage",
        dialects: &["oracle"],
        variants: &[
            r#"
            SELECT
                "SHOP_ORDER"."ID",
                "SHOP_ORDER"."CREATED_AT"
            FROM "SHOP_ORDER"
            WHERE "SHOP_ORDER"."CREATED_AT" >= SYSDATE - 30
            ORDER BY "SHOP_ORDER"."CREATED_AT" DESC
            "#,
            r#"
            SELECT
                "SHOP_ORDER"."ID",
                "SHOP_ORDER"."CREATED_AT"
            FROM "SHOP_ORDER"
            WHERE "SHOP_ORDER"."CREATED_AT" >= SYSDATE - 365
            ORDER BY "SHOP_ORDER"."CREATED_AT" DESC
            "#,
        ],
    },
    Case {
        name: "orm oracle update",
        dialects: &["oracle"],
        variants: &[
            r#"
            UPDATE "PROFILE_PROFILE"
            SET "TIMEZONE" = 'Europe/Paris', "UPDATED_AT" = SYSTIMESTAMP
            WHERE "PROFILE_PROFILE"."USER_ID" = 123
            "#,
            r#"
            UPDATE "PROFILE_PROFILE"
            SET "TIMEZONE" = 'America/New_York', "UPDATED_AT" = SYSTIMESTAMP
            WHERE "PROFILE_PROFILE"."USER_ID" = 999
            "#,
        ],
    },
];

/// Every corpus case.
pub fn all_cases() -> Vec<&'static Case> {
    CASES.iter().chain(HARD_CASES).chain(ORM_CASES).collect()
}

/// Looks a case up by name across the whole corpus.
pub fn find_case(name: &str) -> Option<&'static Case> {
    all_cases().into_iter().find(|case| case.name == name)
}
