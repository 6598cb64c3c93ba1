//! Spanish (es-ES)

use super::keys::{
    AuthTexts, CommonTexts, CreateUserTexts, FieldTexts, HintTexts, HomeTexts, NavTexts,
    StatusTexts, Translations, UserMenuTexts, UsersTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Aplicación Académica",
        loading: "Cargando...",
        no_data: "Sin datos",
        none: "—",
        cycle_hint: "(←→ para cambiar)",
    },

    hints: HintTexts {
        navigate: "Navegar",
        select: "Seleccionar",
        open: "Abrir",
        switch_panel: "Cambiar panel",
        next_field: "Siguiente campo",
        cycle: "Cambiar opción",
        submit: "Enviar",
        back: "Volver",
        menu: "Menú de usuario",
        sidebar: "Barra lateral",
        refresh: "Recargar",
        register: "Crear cuenta",
        forgot: "Olvidé mi contraseña",
        quit: "Salir",
    },

    nav: NavTexts {
        title: "Menú",
        home: "Mi Inicio",
        admin_users: "Administrar usuarios",
        manage_user: "Gestionar usuario",
        create_user: "Crear usuario",
    },

    fields: FieldTexts {
        full_name: "Nombre completo",
        first_name: "Nombre",
        last_name: "Apellido",
        username: "Nombre de usuario",
        identifier: "Usuario o email",
        email: "Email",
        password: "Contraseña",
        new_password: "Nueva contraseña",
        confirm_password: "Confirmar contraseña",
        user_type: "Tipo de usuario",
        state: "Estado",
        role: "Rol",
    },

    auth: AuthTexts {
        login_title: "Iniciar sesión",
        login_subtitle: "Ingresa tus credenciales para acceder",
        register_title: "Crear cuenta",
        register_subtitle: "Completa tus datos para registrarte",
        forgot_title: "Recuperar contraseña",
        forgot_subtitle: "Te enviaremos instrucciones para restablecerla",
        login_button: "Ingresar",
        register_button: "Registrarse",
        forgot_button: "Enviar instrucciones",
        submitting: "Enviando...",
        go_register: "¿No tienes cuenta? Regístrate",
        go_forgot: "¿Olvidaste tu contraseña?",
        back_to_login: "Volver al inicio de sesión",
        choose_user_type: "Selecciona un tipo",
        reset_sent: "Si la cuenta existe, recibirás instrucciones para restablecer tu contraseña.",
        welcome: "Bienvenido",
    },

    home: HomeTexts {
        title: "Espacio de trabajo",
        subtitle: "Gestiona usuarios y recursos de la plataforma académica",
        session: "Sesión",
        signed_in_as: "Usuario",
        caller_id: "ID de usuario (x-user-id)",
        api: "API",
        language: "Idioma",
        shortcuts: "Atajos",
    },

    users: UsersTexts {
        col_id: "ID",
        col_username: "Username",
        col_email: "Email",
        col_firstname: "Nombre",
        col_lastname: "Apellido",
        col_state: "Estado",
        col_role: "Rol",
        empty: "No hay usuarios registrados",
        edit_title: "Editar usuario",
        password_hint: "Dejar en blanco para mantener la actual",
        save: "Guardar cambios",
        saving: "Guardando...",
    },

    create_user: CreateUserTexts {
        title: "Registrar nuevo usuario",
        state_default: "Por defecto",
        submit: "Crear usuario",
        submitting: "Creando...",
    },

    user_menu: UserMenuTexts {
        title: "Cuenta",
        profile: "Mi Perfil",
        settings: "Configuración",
        logout: "Cerrar Sesión",
    },

    status: StatusTexts {
        logged_out: "Sesión cerrada",
        refreshing: "Recargando...",
        profile: "Perfil",
        settings: "Archivo de configuración",
        guest: "invitado",
    },
};
