//! Built-in Persian tables.

pub(super) const ERRORS: &[(&str, &str)] = &[
    ("required", "فیلد {attribute} الزامی است."),
    ("filled", "فیلد {attribute} در صورت ارسال باید مقدار داشته باشد."),
    ("present", "فیلد {attribute} باید ارسال شود."),
    ("prohibited", "ارسال فیلد {attribute} مجاز نیست."),
    ("string", "فیلد {attribute} باید رشته باشد."),
    ("numeric", "فیلد {attribute} باید عدد باشد."),
    ("integer", "فیلد {attribute} باید عدد صحیح باشد."),
    ("boolean", "فیلد {attribute} باید درست یا نادرست باشد."),
    ("array", "فیلد {attribute} باید آرایه باشد."),
    ("json", "فیلد {attribute} باید یک رشته JSON معتبر باشد."),
    ("email", "فیلد {attribute} باید یک آدرس ایمیل معتبر باشد."),
    ("url", "فیلد {attribute} باید یک آدرس اینترنتی معتبر باشد."),
    (
        "active_url",
        "فیلد {attribute} باید آدرسی با میزبان قابل دسترس باشد.",
    ),
    ("ip", "فیلد {attribute} باید یک آدرس IP معتبر باشد."),
    ("ipv4", "فیلد {attribute} باید یک آدرس IPv4 معتبر باشد."),
    ("ipv6", "فیلد {attribute} باید یک آدرس IPv6 معتبر باشد."),
    ("uuid", "فیلد {attribute} باید یک UUID معتبر باشد."),
    ("alpha", "فیلد {attribute} فقط می‌تواند شامل حروف باشد."),
    (
        "alpha_dash",
        "فیلد {attribute} فقط می‌تواند شامل حروف، اعداد، خط تیره و زیرخط باشد.",
    ),
    ("alpha_num", "فیلد {attribute} فقط می‌تواند شامل حروف و اعداد باشد."),
    ("regex", "قالب فیلد {attribute} نامعتبر است."),
    ("not_regex", "قالب فیلد {attribute} مجاز نیست."),
    ("date", "فیلد {attribute} باید یک تاریخ معتبر باشد."),
    ("date_format", "فیلد {attribute} باید با قالب {format} مطابقت داشته باشد."),
    ("timezone", "فیلد {attribute} باید یک منطقه زمانی معتبر باشد."),
    (
        "starts_with",
        "فیلد {attribute} باید با یکی از این مقادیر شروع شود: {values}.",
    ),
    (
        "ends_with",
        "فیلد {attribute} باید با یکی از این مقادیر پایان یابد: {values}.",
    ),
    ("mimes", "فیلد {attribute} باید فایلی از نوع {values} باشد."),
    ("image", "فیلد {attribute} باید تصویر باشد."),
    (
        "dimensions",
        "ابعاد تصویر {attribute} باید بین {min_width}x{min_height} و {max_width}x{max_height} پیکسل باشد.",
    ),
    ("before", "فیلد {attribute} باید تاریخی قبل از {date} باشد."),
    ("after", "فیلد {attribute} باید تاریخی بعد از {date} باشد."),
    (
        "before_or_equal",
        "فیلد {attribute} باید تاریخی قبل یا برابر با {date} باشد.",
    ),
    (
        "after_or_equal",
        "فیلد {attribute} باید تاریخی بعد یا برابر با {date} باشد.",
    ),
    ("date_equals", "فیلد {attribute} باید تاریخی برابر با {date} باشد."),
    ("max_numeric", "فیلد {attribute} نباید بزرگتر از {max} باشد."),
    ("min_numeric", "فیلد {attribute} باید حداقل {min} باشد."),
    ("max_string", "فیلد {attribute} نباید بیشتر از {max} کاراکتر باشد."),
    ("min_string", "فیلد {attribute} باید حداقل {min} کاراکتر باشد."),
    ("digits", "فیلد {attribute} باید {digits} رقم باشد."),
    ("digits_between", "فیلد {attribute} باید بین {min} و {max} رقم باشد."),
    ("in", "مقدار انتخاب شده برای {attribute} نامعتبر است."),
    ("not_in", "مقدار انتخاب شده برای {attribute} مجاز نیست."),
    (
        "in_array",
        "هر یک از موارد فیلد {attribute} باید یکی از این مقادیر باشد: {values}.",
    ),
    ("exists", "مقدار انتخاب شده برای {attribute} وجود ندارد."),
    (
        "exists_in_string",
        "فیلد {attribute} باید در یکی از این مقادیر وجود داشته باشد: {values}.",
    ),
    ("unique", "{attribute} قبلا استفاده شده است."),
    ("distinct", "فیلد {attribute} مقدار تکراری دارد."),
    ("confirmed", "تکرار فیلد {attribute} مطابقت ندارد."),
    ("same", "فیلد {attribute} باید با {other} یکسان باشد."),
    ("different", "فیلد {attribute} و {other} باید متفاوت باشند."),
    (
        "accepted_if",
        "وقتی {other} برابر {value} است، فیلد {attribute} باید پذیرفته شود.",
    ),
    (
        "declined_if",
        "وقتی {other} برابر {value} است، فیلد {attribute} باید رد شود.",
    ),
    (
        "required_if",
        "وقتی {other} برابر {value} است، فیلد {attribute} الزامی است.",
    ),
    (
        "required_unless",
        "فیلد {attribute} الزامی است مگر اینکه {other} یکی از {values} باشد.",
    ),
    (
        "prohibited_if",
        "وقتی {other} برابر {value} است، ارسال فیلد {attribute} مجاز نیست.",
    ),
    ("accepted", "فیلد {attribute} باید پذیرفته شود."),
    ("declined", "فیلد {attribute} باید رد شود."),
    (
        "password_letters",
        "فیلد {attribute} باید حداقل شامل یک حرف باشد.",
    ),
    (
        "password_mixed",
        "فیلد {attribute} باید حداقل شامل یک حرف بزرگ و یک حرف کوچک باشد.",
    ),
    (
        "password_numbers",
        "فیلد {attribute} باید حداقل شامل یک عدد باشد.",
    ),
    (
        "password_symbols",
        "فیلد {attribute} باید حداقل شامل یک نماد باشد.",
    ),
    (
        "password_uncompromised",
        "{attribute} وارد شده در یک نشت اطلاعات دیده شده است. لطفا {attribute} دیگری انتخاب کنید.",
    ),
    (
        "type_mismatch",
        "برای قانون {rule}، فیلد {attribute} باید مقداری {expected} باشد.",
    ),
    (
        "missing_reference",
        "فیلد {attribute} به {other} وابسته است که ارسال نشده است.",
    ),
];

pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("validation_passed", "اعتبارسنجی موفق بود"),
    ("validation_failed", "اعتبارسنجی ناموفق بود"),
    ("errors", "خطاها"),
    ("summary", "خلاصه"),
    ("total_errors", "تعداد خطاها"),
    ("attributes.password_confirmation", "تکرار رمز عبور"),
    ("attributes.email", "ایمیل"),
    ("types.numeric", "عددی"),
    ("types.string", "رشته‌ای"),
    ("types.date", "تاریخی"),
    ("types.array", "آرایه‌ای"),
    ("types.scalar", "تکی"),
    ("types.dimensions", "دارای طول و عرض"),
];
